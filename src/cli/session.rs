//! Interactive menu loop over an arbitrary input and output.

use super::menu::MenuChoice;
use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::Birthday;
use crate::error::ContactBookError;
use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

/// Whether the menu loop should keep going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Print one record followed by its days to birthday as of `today`.
fn write_record<W: Write>(output: &mut W, record: &Record, today: NaiveDate) -> io::Result<()> {
    let days = record
        .days_to_birthday_from(today)
        .map_or_else(|| "N/A".to_string(), |days| days.to_string());
    writeln!(output, "{}", record)?;
    writeln!(output, "Days to Birthday: {}", days)?;
    writeln!(output)
}

/// A menu-driven session editing one address book.
///
/// Only I/O failures on the session's own input or output end the session;
/// every address book error is reported to the user and the loop continues.
pub struct Session<R, W> {
    book: AddressBook,
    config: Config,
    input: R,
    output: W,
    today: NaiveDate,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(book: AddressBook, config: Config, input: R, output: W) -> Self {
        Self {
            book,
            config,
            input,
            output,
            today: Local::now().date_naive(),
        }
    }

    /// Use a fixed date for "days to birthday".
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Load the configured contacts file, starting empty if it does not exist.
    pub fn load_startup(&mut self) -> io::Result<()> {
        let path = self.config.contacts_file.clone();
        match self.book.load(&path) {
            Ok(()) => {
                info!("Loaded {} records from {}", self.book.len(), path.display());
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                writeln!(
                    self.output,
                    "File not found. Starting with an empty address book."
                )
            }
            Err(e) => {
                warn!("Could not load {}: {}", path.display(), e);
                writeln!(self.output, "Could not load address book: {}", e)
            }
        }
    }

    /// Run the menu loop until the user exits or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };
            if line.is_empty() {
                continue;
            }

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(message) => {
                    writeln!(self.output, "{}", message)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::Add => self.add()?,
            MenuChoice::Delete => self.delete()?,
            MenuChoice::Edit => self.edit()?,
            MenuChoice::FindByName => self.find_by_name()?,
            MenuChoice::Show => self.show()?,
            MenuChoice::Save => self.save()?,
            MenuChoice::Load => self.load()?,
            MenuChoice::FindByPhone => self.find_by_phone()?,
            MenuChoice::Exit => {
                writeln!(self.output, "Goodbye!")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    /// Print `text` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like `prompt`, but end of input reads as an empty answer.
    fn ask(&mut self, text: &str) -> io::Result<String> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }

    fn report(&mut self, error: &ContactBookError) -> io::Result<()> {
        writeln!(self.output, "Error: {}", error)
    }

    fn add(&mut self) -> io::Result<()> {
        let name = self.ask("Enter name: ")?;
        let phone = self.ask("Enter phone: ")?;
        let birthday = self.ask("Enter birthday (YYYY-MM-DD): ")?;

        let birthday = if birthday.is_empty() {
            None
        } else {
            match Birthday::parse(&birthday) {
                Ok(birthday) => Some(birthday.date()),
                Err(e) => return self.report(&ContactBookError::from(e)),
            }
        };
        let phones: Vec<&str> = if phone.is_empty() {
            Vec::new()
        } else {
            vec![phone.as_str()]
        };

        match self.book.add_record(name.as_str(), &phones, birthday) {
            Ok(()) => writeln!(self.output, "{} added to the address book.", name),
            Err(e) => self.report(&e),
        }
    }

    fn delete(&mut self) -> io::Result<()> {
        let name = self.ask("Enter name to delete: ")?;
        match self.book.delete_record(&name) {
            Ok(_) => writeln!(self.output, "{} deleted from the address book.", name),
            Err(ContactBookError::NotFound(_)) => {
                writeln!(self.output, "{} not found in the address book.", name)
            }
            Err(e) => self.report(&e),
        }
    }

    fn edit(&mut self) -> io::Result<()> {
        let name = self.ask("Enter name to edit: ")?;
        let new_name = self.ask("Enter new name (press Enter to keep existing): ")?;
        let new_phone = self.ask("Enter new phone (press Enter to keep existing): ")?;

        let new_phones = [new_phone.as_str()];
        let new_phones = (!new_phone.is_empty()).then_some(&new_phones[..]);

        match self
            .book
            .edit_record(&name, Some(new_name.as_str()), new_phones)
        {
            Ok(()) => writeln!(self.output, "{} edited in the address book.", name),
            Err(ContactBookError::NotFound(_)) => {
                writeln!(self.output, "{} not found in the address book.", name)
            }
            Err(e) => self.report(&e),
        }
    }

    fn find_by_name(&mut self) -> io::Result<()> {
        let name = self.ask("Enter name to find: ")?;
        let found = self.book.find_by_name(&name);
        if found.is_empty() {
            return writeln!(self.output, "No records found for name: {}", name);
        }
        for record in found {
            write_record(&mut self.output, record, self.today)?;
        }
        Ok(())
    }

    fn find_by_phone(&mut self) -> io::Result<()> {
        let phone = self.ask("Enter phone to find: ")?;
        let found = self.book.find_by_phone(&phone);
        if found.is_empty() {
            return writeln!(self.output, "No records found for phone: {}", phone);
        }
        for record in found {
            write_record(&mut self.output, record, self.today)?;
        }
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        let answer = self.ask("Enter page size: ")?;
        let page_size = if answer.is_empty() {
            self.config.page_size
        } else {
            match answer.parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return writeln!(self.output, "Page size must be a positive number.");
                }
            }
        };

        if self.book.is_empty() {
            return writeln!(self.output, "The address book is empty.");
        }
        for (number, page) in self.book.paged_iterator(page_size).pages().enumerate() {
            writeln!(self.output, "Page {}:", number + 1)?;
            for record in page {
                write_record(&mut self.output, record, self.today)?;
            }
        }
        Ok(())
    }

    fn file_name(&mut self, text: &str) -> io::Result<PathBuf> {
        let answer = self.ask(text)?;
        Ok(if answer.is_empty() {
            self.config.contacts_file.clone()
        } else {
            PathBuf::from(answer)
        })
    }

    fn save(&mut self) -> io::Result<()> {
        let path = self.file_name("Enter filename to save: ")?;
        match self.book.save(&path) {
            Ok(()) => {
                info!("Saved {} records to {}", self.book.len(), path.display());
                writeln!(self.output, "Address book saved to file.")
            }
            Err(e) => self.report(&e),
        }
    }

    fn load(&mut self) -> io::Result<()> {
        let path = self.file_name("Enter filename to load: ")?;
        match self.book.load(&path) {
            Ok(()) => {
                info!("Loaded {} records from {}", self.book.len(), path.display());
                writeln!(self.output, "Address book loaded from file.")
            }
            Err(e) if e.is_recoverable() => {
                warn!("{}", e);
                writeln!(
                    self.output,
                    "File not found. The address book was left unchanged."
                )
            }
            Err(e) => self.report(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(book: AddressBook, script: &str) -> (AddressBook, String) {
        let mut output = Vec::new();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let mut session = Session::new(book, Config::default(), Cursor::new(script), &mut output)
            .with_today(today);
        session.run().unwrap();
        let book = session.into_book();
        (book, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_exit() {
        let (_, output) = run_session(AddressBook::new(), "8\n");
        assert!(output.contains("1. Add Record"));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let (book, _) = run_session(AddressBook::new(), "1\nAnn\n");
        assert_eq!(book.get("Ann").unwrap().phones().len(), 0);
    }

    #[test]
    fn test_unknown_choice() {
        let (_, output) = run_session(AddressBook::new(), "42\n8\n");
        assert!(output.contains("Unknown choice: 42"));
    }

    #[test]
    fn test_add_and_find() {
        let (book, output) =
            run_session(AddressBook::new(), "1\nAnn\n12345\n1990-03-20\n4\nAnn\n8\n");
        assert_eq!(book.len(), 1);
        assert!(output.contains("Ann added to the address book."));
        assert!(output.contains("Phones: 12345"));
        assert!(output.contains("Birthday: 1990-03-20"));
        assert!(output.contains("Days to Birthday: 5"));
    }

    #[test]
    fn test_add_rejects_bad_birthday() {
        let (book, output) = run_session(AddressBook::new(), "1\nAnn\n123\n1990-02-30\n8\n");
        assert!(book.is_empty());
        assert!(output.contains("Error: Invalid value: Invalid birthday: 1990-02-30"));
    }

    #[test]
    fn test_add_rejects_bad_phone() {
        let (book, output) = run_session(AddressBook::new(), "1\nAnn\n12-3\n\n8\n");
        assert!(book.is_empty());
        assert!(output.contains("Invalid phone number: 12-3"));
    }

    #[test]
    fn test_delete_unknown() {
        let (_, output) = run_session(AddressBook::new(), "2\nNobody\n8\n");
        assert!(output.contains("Nobody not found in the address book."));
    }

    #[test]
    fn test_edit_renames_without_rekey() {
        let mut book = AddressBook::new();
        book.add_record("Bob", &["111"], None).unwrap();

        let (book, output) = run_session(book, "3\nBob\nBobby\n222\n8\n");
        assert!(output.contains("Bob edited in the address book."));
        let record = book.get("Bob").unwrap();
        assert_eq!(record.name().as_str(), "Bobby");
        assert_eq!(record.phone_values(), vec!["222"]);
    }

    #[test]
    fn test_find_by_phone() {
        let mut book = AddressBook::new();
        book.add_record("Ann", &["111"], None).unwrap();
        book.add_record("Bob", &["222"], None).unwrap();

        let (_, output) = run_session(book, "9\n222\n9\n333\n8\n");
        assert!(output.contains("Name: Bob"));
        assert!(!output.contains("Name: Ann"));
        assert!(output.contains("No records found for phone: 333"));
    }

    #[test]
    fn test_show_pages() {
        let mut book = AddressBook::new();
        for name in ["A", "B", "C"] {
            book.add_record(name, &[], None).unwrap();
        }

        let (_, output) = run_session(book, "5\n2\n8\n");
        assert!(output.contains("Page 1:\nName: A"));
        assert!(output.contains("Page 2:\nName: C"));
        assert!(!output.contains("Page 3:"));
        assert!(output.contains("Days to Birthday: N/A"));
    }

    #[test]
    fn test_write_record_layout() {
        let mut book = AddressBook::new();
        book.add_record("Ann", &["111", "222"], NaiveDate::from_ymd_opt(1990, 3, 20))
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        let mut output = Vec::new();
        write_record(&mut output, book.get("Ann").unwrap(), today).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Name: Ann\nPhones: 111, 222\nBirthday: 1990-03-20\nDays to Birthday: 5\n\n"
        );
    }

    #[test]
    fn test_find_by_name_prints_every_match() {
        let mut book = AddressBook::new();
        book.add_record("Ann", &["111"], None).unwrap();
        book.add_record("Bob", &["222"], None).unwrap();
        book.edit_record("Bob", Some("Ann"), None).unwrap();

        let (_, output) = run_session(book, "4\nAnn\n4\nZed\n8\n");
        assert_eq!(output.matches("Name: Ann").count(), 2);
        assert!(output.contains("Phones: 111"));
        assert!(output.contains("Phones: 222"));
        assert!(output.contains("No records found for name: Zed"));
    }

    #[test]
    fn test_show_empty_book() {
        let (_, output) = run_session(AddressBook::new(), "5\n\n8\n");
        assert!(output.contains("The address book is empty."));
        assert!(!output.contains("Page 1:"));
    }

    #[test]
    fn test_show_rejects_zero_page_size() {
        let (_, output) = run_session(AddressBook::new(), "5\n0\n8\n");
        assert!(output.contains("Page size must be a positive number."));
    }
}

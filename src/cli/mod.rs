//! Interactive command-line driver.
//!
//! A thin layer over `AddressBook`: it reads menu choices and arguments,
//! calls the book's operations and renders the results.

pub mod menu;
pub mod session;

pub use menu::MenuChoice;
pub use session::Session;

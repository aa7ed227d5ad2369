//! Interactive operator menu
//!
//! Usage: crm [menu]
//!
//! Asks for credentials, checks them once, then loops over the add / print /
//! export menus until the operator exits or input ends.

use super::prompt::Prompter;
use crate::config::CrmConfig;
use crm_core::errors::{CrmError, ExError};
use crm_core::model::{
    optional_text, Customer, NewCustomer, NewProduct, NewSupport, NewTicket, NewUser, Product,
    Record, Support, Table, Ticket,
};
use crm_core_types::Sensitive;
use crm_engine::commands::{auth, export, records, store};
use crm_engine::{ExportOutcome, Listing};
use crm_store::repo::StoreRecord;
use crm_store::CrmRepo;
use serde::Serialize;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

type CliResult<T> = Result<T, Box<dyn Error>>;

pub fn execute(config: &CrmConfig) -> CliResult<()> {
    let mut repo = store::open_store(&config.db_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let prompter = Prompter::new(stdin.lock(), stdout.lock());

    let mut session = Session {
        repo: &mut repo,
        prompter,
        export_dir: config.export_dir.clone(),
        exit_on_invalid: config.exit_on_invalid,
    };
    if !session.authenticate()? {
        return Err(Box::new(CrmError::InvalidCredentials));
    }
    session.run()
}

enum Flow {
    Continue,
    Exit,
}

/// Read an answer or leave the session at end of input
macro_rules! ask_or_exit {
    ($session:expr, $prompt:expr) => {
        match $session.prompter.ask($prompt)? {
            Some(answer) => answer,
            None => return Ok(Flow::Exit),
        }
    };
}

struct Session<'a, R, W> {
    repo: &'a mut CrmRepo,
    prompter: Prompter<R, W>,
    export_dir: PathBuf,
    exit_on_invalid: bool,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    /// Prompt for credentials and check them; false on mismatch or no input
    fn authenticate(&mut self) -> CliResult<bool> {
        let Some(username) = self.prompter.ask("Enter username: ")? else {
            return Ok(false);
        };
        let Some(password) = self.prompter.ask("Enter password: ")? else {
            return Ok(false);
        };

        let ok = auth::login(self.repo, &username, &Sensitive::new(password))?;
        if ok {
            self.prompter.say(&format!("Welcome, {}.\n", username))?;
        }
        Ok(ok)
    }

    fn run(&mut self) -> CliResult<()> {
        loop {
            self.prompter.say("1. Add information")?;
            self.prompter.say("2. Print information")?;
            self.prompter.say("3. Export information")?;
            self.prompter.say("4. Exit")?;
            let Some(choice) = self.prompter.ask("\nChoose an option: ")? else {
                return Ok(());
            };

            let flow = match choice.trim() {
                "1" => self.add_menu()?,
                "2" => self.print_menu()?,
                "3" => self.export_menu()?,
                "4" => {
                    self.prompter.say("Exiting...")?;
                    Flow::Exit
                }
                _ => {
                    self.prompter.say("Invalid option. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    fn add_menu(&mut self) -> CliResult<Flow> {
        self.prompter.say("1. Add customer")?;
        self.prompter.say("2. Add product")?;
        self.prompter.say("3. Add support")?;
        self.prompter.say("4. Add a ticket")?;
        self.prompter.say("5. Add a user")?;
        let choice = ask_or_exit!(self, "\nChoose an option: ");

        let (table, result) = match choice.trim() {
            "1" => {
                let contact_no = ask_or_exit!(self, "Enter contact_no: ");
                let purchase_hist = ask_or_exit!(self, "Enter purchase_hist: ");
                let ticket_hist = ask_or_exit!(self, "Enter ticket_hist: ");
                let payment_type = ask_or_exit!(self, "Enter payment_type: ");
                let customer = NewCustomer::new(contact_no, purchase_hist, ticket_hist, payment_type);
                (Table::Customer, records::add_customer(self.repo, &customer))
            }
            "2" => {
                let project_type = ask_or_exit!(self, "Enter project_type: ");
                let project_date = ask_or_exit!(self, "Enter project_date: ");
                let project_rating = ask_or_exit!(self, "Enter project_rating: ");
                let product = NewProduct::new(project_type, project_date, project_rating);
                (Table::Product, records::add_product(self.repo, &product))
            }
            "3" => {
                let ticket_date = ask_or_exit!(self, "Enter ticket_date: ");
                let ticket_status = ask_or_exit!(self, "Enter ticket_status: ");
                let ticket_manager = ask_or_exit!(self, "Enter ticket manager name: ");
                let ticket_id = ask_or_exit!(self, "Enter ticket_id (blank for none): ");
                let project_id = ask_or_exit!(self, "Enter project_id (blank for none): ");
                let mut support = NewSupport::new(ticket_manager, ticket_date, ticket_status);
                support.ticket_id = optional_text(ticket_id);
                support.project_id = optional_text(project_id);
                (Table::Support, records::add_support(self.repo, &support))
            }
            "4" => {
                let ticket_reason = ask_or_exit!(self, "Why would you like to create a ticket? ");
                let ticket_date = ask_or_exit!(self, "Enter ticket_date: ");
                let ticket_status = ask_or_exit!(self, "Enter ticket_status: ");
                let customer_id = ask_or_exit!(self, "Enter customer_id (blank for none): ");
                let project_id = ask_or_exit!(self, "Enter project_id (blank for none): ");
                let mut ticket = NewTicket::new(ticket_date, ticket_status, ticket_reason);
                ticket.customer_id = optional_text(customer_id);
                ticket.project_id = optional_text(project_id);
                (Table::Ticket, records::add_ticket(self.repo, &ticket))
            }
            "5" => {
                let username = ask_or_exit!(self, "Enter new username: ");
                let password = ask_or_exit!(self, "Enter new password: ");
                let user = NewUser::new(username, password);
                (Table::User, auth::add_user(self.repo, &user))
            }
            other => return self.invalid_choice(other),
        };

        if self.report(result)?.is_some() {
            self.prompter
                .say(&format!("{} added successfully.", table.title()))?;
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> CliResult<Flow> {
        self.prompter.say("1. Print customer table")?;
        self.prompter.say("2. Print product table")?;
        self.prompter.say("3. Print support table")?;
        self.prompter
            .say("4. Print customer data based on payment type")?;
        self.prompter.say("5. Print ticket table")?;
        let choice = ask_or_exit!(self, "\nChoose an option: ");

        match choice.trim() {
            "1" => self.print_table::<Customer>()?,
            "2" => self.print_table::<Product>()?,
            "3" => self.print_table::<Support>()?,
            "4" => {
                let payment_type = ask_or_exit!(self, "Enter the payment type: ");
                self.prompter.say(&payment_type)?;
                let listing = records::customers_by_payment_type(self.repo, &payment_type);
                if let Some(listing) = self.report(listing)? {
                    self.print_listing(&listing)?;
                }
            }
            "5" => self.print_table::<Ticket>()?,
            other => return self.invalid_choice(other),
        }
        Ok(Flow::Continue)
    }

    fn export_menu(&mut self) -> CliResult<Flow> {
        self.prompter.say("1. Export customer data to csv")?;
        self.prompter.say("2. Export product data to csv")?;
        self.prompter.say("3. Export support data to csv")?;
        self.prompter.say("4. Export ticket data to csv")?;
        let choice = ask_or_exit!(self, "\nChoose an option: ");

        match choice.trim() {
            "1" => self.export_table::<Customer>()?,
            "2" => self.export_table::<Product>()?,
            "3" => self.export_table::<Support>()?,
            "4" => self.export_table::<Ticket>()?,
            other => return self.invalid_choice(other),
        }
        Ok(Flow::Continue)
    }

    fn print_table<T: StoreRecord>(&mut self) -> CliResult<()> {
        let listing = records::list::<T>(self.repo);
        if let Some(listing) = self.report(listing)? {
            self.print_listing(&listing)?;
        }
        Ok(())
    }

    fn print_listing<T: Record>(&mut self, listing: &Listing<T>) -> CliResult<()> {
        match listing {
            Listing::Found(rows) => {
                for row in rows {
                    self.prompter.say(&row.describe())?;
                }
            }
            Listing::NoneFound => {
                self.prompter
                    .say(&format!("No {} found.", T::TABLE.name()))?;
            }
        }
        Ok(())
    }

    fn export_table<T>(&mut self) -> CliResult<()>
    where
        T: StoreRecord + Serialize,
    {
        let outcome = export::export::<T>(self.repo, &self.export_dir);
        match self.report(outcome)? {
            Some(ExportOutcome::Written { path, .. }) => {
                self.prompter.say(&format!(
                    "{} data successfully exported to {}",
                    T::TABLE.title(),
                    path.display()
                ))?;
            }
            Some(ExportOutcome::NoData) => {
                self.prompter
                    .say(&format!("No {} data to export.", T::TABLE.name()))?;
            }
            None => {}
        }
        Ok(())
    }

    fn invalid_choice(&mut self, choice: &str) -> CliResult<Flow> {
        let err = ExError::from(CrmError::InvalidMenuChoice {
            choice: choice.to_string(),
        });
        tracing::warn!(op = "menu", err_code = err.code(), "{}", err);
        if self.exit_on_invalid {
            self.prompter.say("Invalid input. Exiting...")?;
            Ok(Flow::Exit)
        } else {
            self.prompter.say("Invalid input.")?;
            Ok(Flow::Continue)
        }
    }

    /// Print recoverable failures and carry on; propagate fatal ones
    fn report<T>(&mut self, result: Result<T, ExError>) -> CliResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind().is_fatal() => Err(Box::new(e)),
            Err(e) => {
                self.prompter.say(&format!("Error: {}", e))?;
                Ok(None)
            }
        }
    }
}

//! Record creation and listing

use super::instrumented_on;
use crm_core::model::{Customer, NewCustomer, NewProduct, NewSupport, NewTicket, Table};
use crm_store::repo::StoreRecord;
use crm_store::{CrmRepo, Result};

/// Result of a listing
///
/// An empty table is a successful outcome of its own, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<T> {
    Found(Vec<T>),
    NoneFound,
}

impl<T> Listing<T> {
    fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Listing::NoneFound
        } else {
            Listing::Found(rows)
        }
    }

    pub fn rows(&self) -> &[T] {
        match self {
            Listing::Found(rows) => rows,
            Listing::NoneFound => &[],
        }
    }
}

pub fn add_customer(repo: &mut CrmRepo, customer: &NewCustomer) -> Result<i64> {
    instrumented_on("add_customer", Table::Customer, || {
        repo.add_customer(customer)
    })
}

pub fn add_product(repo: &mut CrmRepo, product: &NewProduct) -> Result<i64> {
    instrumented_on("add_product", Table::Product, || repo.add_product(product))
}

pub fn add_support(repo: &mut CrmRepo, support: &NewSupport) -> Result<i64> {
    instrumented_on("add_support", Table::Support, || repo.add_support(support))
}

pub fn add_ticket(repo: &mut CrmRepo, ticket: &NewTicket) -> Result<i64> {
    instrumented_on("add_ticket", Table::Ticket, || repo.add_ticket(ticket))
}

/// Every row of `T`'s table
pub fn list<T: StoreRecord>(repo: &CrmRepo) -> Result<Listing<T>> {
    instrumented_on("list", T::TABLE, || {
        repo.fetch_all::<T>().map(Listing::from_rows)
    })
}

/// Customers paying with exactly `payment_type`
pub fn customers_by_payment_type(repo: &CrmRepo, payment_type: &str) -> Result<Listing<Customer>> {
    instrumented_on("customers_by_payment_type", Table::Customer, || {
        repo.customers_by_payment_type(payment_type)
            .map(Listing::from_rows)
    })
}

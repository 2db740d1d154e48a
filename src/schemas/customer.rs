//! Customer schema - Customers known to the backend

use serde::{Deserialize, Serialize};

use super::wire::{null_as_empty, EntityId};

/// A customer from `GET /admin/customers`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bookings: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_spent: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One item of the customer listing.
///
/// The admin endpoint wraps each customer with its booking count; plain
/// customer records are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CustomerEntry {
    #[serde(rename_all = "camelCase")]
    Counted {
        customer: Customer,
        #[serde(default)]
        booking_count: Option<u64>,
    },
    Plain(Customer),
}

impl From<CustomerEntry> for Customer {
    fn from(entry: CustomerEntry) -> Self {
        match entry {
            CustomerEntry::Counted {
                mut customer,
                booking_count,
            } => {
                customer.total_bookings = Some(booking_count.unwrap_or(0));
                customer
            }
            CustomerEntry::Plain(customer) => customer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_and_plain_entries() {
        let entries: Vec<CustomerEntry> = serde_json::from_str(
            r#"[
                {"customer": {"id": 3, "name": "Asha Rao", "email": null, "phone": "98765"}, "bookingCount": 4},
                {"customer": {"id": 4, "name": "Ravi"}},
                {"id": "c-5", "name": "Meera", "totalBookings": 2}
            ]"#,
        )
        .unwrap();
        let customers: Vec<Customer> = entries.into_iter().map(Customer::from).collect();

        assert_eq!(customers[0].id, Some(EntityId::Number(3)));
        assert_eq!(customers[0].email, "");
        assert_eq!(customers[0].total_bookings, Some(4));
        assert_eq!(customers[1].total_bookings, Some(0));
        assert_eq!(customers[2].name, "Meera");
        assert_eq!(customers[2].total_bookings, Some(2));
    }
}

use stockroom_core::Entity;

use crate::Address;

stockroom_core::numeric_id! {
    /// Customer identifier.
    pub struct CustomerId;
}

/// A customer placing orders.
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    name: String,
    contact_info: String,
    address: Option<Address>,
}

impl Customer {
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        contact_info: impl Into<String>,
        address: Option<Address>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            contact_info: contact_info.into(),
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Customer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Customer(id={}, name={}, contact={})",
            self.id, self.name, self.contact_info
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_address() {
        let customer = Customer::new(
            CustomerId::new(501),
            "Пан Роман",
            "pan@roman.com",
            Some(Address::new("Ukraine", "Kyiv", "Khreshchatyk")),
        );
        assert_eq!(
            customer.to_string(),
            "Customer(id=501, name=Пан Роман, contact=pan@roman.com)"
        );
        assert_eq!(customer.address().map(|a| a.city.as_str()), Some("Kyiv"));
    }

    #[test]
    fn address_is_optional() {
        let customer = Customer::new(CustomerId::new(1), "Walk-in", "", None);
        assert!(customer.address().is_none());
        assert_eq!(customer.id(), CustomerId::new(1));
    }
}

//! Contact store.
//!
//! Business logic for adding, searching and dialing contacts. The store
//! never dials itself: it produces a [`DialRequest`] that the caller
//! forwards to the dial service.

use crate::domain::{phone, PhoneNumber};
use crate::error::{PhoneError, PhoneResult};
use crate::models::{Contact, ContactType};
use crate::repositories::Repository;
use crate::services::dial_service::ContactLookup;
use tracing::{info, warn};

/// Request to dial one of a contact's numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialRequest {
    pub number: String,
    pub contact_name: String,
}

/// Result of adding a number to an existing contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneAddOutcome {
    /// The number was stored and persisted
    Added,
    /// The contact already held the number; nothing changed
    AlreadyPresent,
}

/// Result of adding a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAddOutcome {
    /// A new contact was appended
    Created,
    /// The name was already taken; its numbers went to that contact
    Merged { name: String, added: usize },
}

/// Owns the contact list and mirrors it to its repository.
pub struct ContactStore {
    repository: Box<dyn Repository<Contact>>,
}

impl ContactStore {
    /// Create a store over an already-loaded repository.
    pub fn new(repository: Box<dyn Repository<Contact>>) -> Self {
        Self { repository }
    }

    /// All contacts in stored order.
    pub fn all(&self) -> &[Contact] {
        self.repository.get_all()
    }

    pub fn len(&self) -> usize {
        self.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    /// Add a contact and persist.
    ///
    /// Duplicate numbers within `contact` are collapsed to their first entry.
    /// When a contact with the same name (ignoring case) already exists, the
    /// new numbers are merged into it instead of creating a second contact
    /// that name lookups could never reach.
    ///
    /// # Errors
    ///
    /// - `PhoneError::EmptyContactName` if the name is blank
    /// - `PhoneError::DuplicateContact` if a contact with the same name
    ///   (ignoring case) already holds one of the numbers
    pub fn add_contact(&mut self, contact: Contact) -> PhoneResult<ContactAddOutcome> {
        let name = contact.name.trim().to_string();
        if name.is_empty() {
            return Err(PhoneError::EmptyContactName);
        }

        let mut deduped = Contact::new(name);
        for entry in contact.phone_numbers {
            if !deduped.add_phone_number(entry.number.clone(), entry.kind) {
                warn!(
                    "Dropping repeated number {} for new contact '{}'",
                    entry.number, deduped.name
                );
            }
        }

        if let Some(entry) = deduped
            .phone_numbers
            .iter()
            .find(|entry| self.is_duplicate(&deduped.name, entry.number.as_str()))
        {
            return Err(PhoneError::DuplicateContact {
                name: deduped.name.clone(),
                number: entry.number.to_string(),
            });
        }

        if let Some(existing) = self
            .repository
            .get_all_mut()
            .iter_mut()
            .find(|c| c.name_matches(&deduped.name))
        {
            let added = deduped
                .phone_numbers
                .into_iter()
                .filter(|entry| existing.add_phone_number(entry.number.clone(), entry.kind))
                .count();
            info!(
                "Merged {} number(s) into existing contact '{}'",
                added, existing.name
            );
            let name = existing.name.clone();
            if added > 0 {
                self.persist();
            }
            return Ok(ContactAddOutcome::Merged { name, added });
        }

        info!(
            "Adding contact '{}' with {} number(s)",
            deduped.name,
            deduped.phone_numbers.len()
        );
        self.repository.add(deduped);
        self.persist();
        Ok(ContactAddOutcome::Created)
    }

    /// Add a number to the contact called `name` (case-insensitive).
    ///
    /// A number the contact already holds is reported as
    /// `PhoneAddOutcome::AlreadyPresent` rather than an error.
    ///
    /// # Errors
    ///
    /// - `PhoneError::InvalidPhoneNumber` if `raw_number` is malformed
    /// - `PhoneError::ContactNotFound` if no contact has that name
    pub fn add_phone_number(
        &mut self,
        name: &str,
        raw_number: &str,
        kind: ContactType,
    ) -> PhoneResult<PhoneAddOutcome> {
        let number = PhoneNumber::new(raw_number)?;

        let contact = self
            .repository
            .get_all_mut()
            .iter_mut()
            .find(|c| c.name_matches(name))
            .ok_or_else(|| PhoneError::ContactNotFound(name.trim().to_string()))?;

        if !contact.add_phone_number(number.clone(), kind) {
            warn!("Contact '{}' already has number {}", contact.name, number);
            return Ok(PhoneAddOutcome::AlreadyPresent);
        }

        info!("Added {} ({}) to contact '{}'", number, kind, contact.name);
        self.persist();
        Ok(PhoneAddOutcome::Added)
    }

    /// Contacts whose name contains `term`, ignoring case.
    pub fn search_by_name(&self, term: &str) -> Vec<&Contact> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }

        self.all()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Contacts holding a number that contains the cleaned `term`.
    pub fn search_by_number(&self, term: &str) -> Vec<&Contact> {
        let term = phone::clean(term.trim());
        if term.is_empty() {
            return Vec::new();
        }

        self.all()
            .iter()
            .filter(|c| {
                c.phone_numbers
                    .iter()
                    .any(|entry| entry.number.as_str().contains(&term))
            })
            .collect()
    }

    /// True if a contact with this name (ignoring case) holds this number.
    pub fn is_duplicate(&self, name: &str, number: &str) -> bool {
        self.all()
            .iter()
            .any(|c| c.name_matches(name) && c.has_phone_number(number))
    }

    /// First contact holding the cleaned `number`.
    pub fn find_by_number(&self, number: &str) -> Option<&Contact> {
        self.all().iter().find(|c| c.has_phone_number(number))
    }

    /// First contact whose name equals `name`, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<&Contact> {
        self.all().iter().find(|c| c.name_matches(name))
    }

    /// Ask for `number` to be dialed on behalf of `contact_name`.
    pub fn request_dial(&self, number: &str, contact_name: &str) -> DialRequest {
        DialRequest {
            number: number.to_string(),
            contact_name: contact_name.to_string(),
        }
    }

    /// Build a dial request for one of a contact's numbers.
    ///
    /// `entry` is 1-based. It may be omitted when the contact has exactly
    /// one number.
    ///
    /// # Errors
    ///
    /// - `PhoneError::ContactNotFound` if no contact has that name
    /// - `PhoneError::NoPhoneNumbers` if the contact has no numbers
    /// - `PhoneError::InvalidSelection` if `entry` is missing or out of range
    pub fn dial_request_for(&self, name: &str, entry: Option<usize>) -> PhoneResult<DialRequest> {
        let contact = self
            .find_by_name(name)
            .ok_or_else(|| PhoneError::ContactNotFound(name.trim().to_string()))?;

        let count = contact.phone_numbers.len();
        let index = match (count, entry) {
            (0, _) => return Err(PhoneError::NoPhoneNumbers(contact.name.clone())),
            (1, None) => 1,
            (_, None) => {
                return Err(PhoneError::InvalidSelection(format!(
                    "{} has {} numbers, choose one with 1-{}",
                    contact.name, count, count
                )))
            }
            (_, Some(n)) if n == 0 || n > count => {
                return Err(PhoneError::InvalidSelection(format!(
                    "{} has no number #{}",
                    contact.name, n
                )))
            }
            (_, Some(n)) => n,
        };

        let chosen = &contact.phone_numbers[index - 1];
        Ok(self.request_dial(chosen.number.as_str(), &contact.name))
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save_changes() {
            warn!("Could not save contacts: {}", e);
        }
    }
}

impl ContactLookup for ContactStore {
    fn contact_name_for(&self, number: &str) -> Option<String> {
        self.find_by_number(number).map(|c| c.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreResult;

    #[derive(Default)]
    struct VecRepository {
        items: Vec<Contact>,
    }

    impl Repository<Contact> for VecRepository {
        fn get_all(&self) -> &[Contact] {
            &self.items
        }

        fn get_all_mut(&mut self) -> &mut Vec<Contact> {
            &mut self.items
        }

        fn add(&mut self, item: Contact) {
            self.items.push(item);
        }

        fn save_changes(&self) -> StoreResult<()> {
            Ok(())
        }

        fn load(&mut self) -> StoreResult<()> {
            Ok(())
        }
    }

    fn store() -> ContactStore {
        ContactStore::new(Box::new(VecRepository::default()))
    }

    fn contact(name: &str, number: &str) -> Contact {
        Contact::with_number(name, PhoneNumber::new(number).unwrap(), ContactType::Home)
    }

    #[test]
    fn test_add_contact_rejects_blank_name() {
        let mut store = store();
        let result = store.add_contact(contact("   ", "5551234567"));
        assert!(matches!(result, Err(PhoneError::EmptyContactName)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_contact_rejects_duplicate_pair() {
        let mut store = store();
        store.add_contact(contact("Ana", "5551234567")).unwrap();

        let result = store.add_contact(contact("ANA", "555-123-4567"));
        match result {
            Err(PhoneError::DuplicateContact { name, number }) => {
                assert_eq!(name, "ANA");
                assert_eq!(number, "5551234567");
            }
            other => panic!("Expected DuplicateContact, got: {:?}", other),
        }

        // Same number under another name is allowed
        store.add_contact(contact("Bob", "5551234567")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_contact_merges_into_existing_name() {
        let mut store = store();
        assert_eq!(
            store.add_contact(contact("Ana", "5551234567")).unwrap(),
            ContactAddOutcome::Created
        );

        let outcome = store.add_contact(contact("ana", "5559990000")).unwrap();

        assert_eq!(
            outcome,
            ContactAddOutcome::Merged {
                name: "Ana".to_string(),
                added: 1
            }
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].phone_numbers.len(), 2);
        let request = store.dial_request_for("ana", Some(2)).unwrap();
        assert_eq!(request.number, "5559990000");
    }

    #[test]
    fn test_add_contact_collapses_repeated_numbers() {
        let mut store = store();
        let mut ana = contact("Ana", "5551234567");
        ana.phone_numbers.push(ana.phone_numbers[0].clone());
        store.add_contact(ana).unwrap();
        assert_eq!(store.all()[0].phone_numbers.len(), 1);
    }

    #[test]
    fn test_dial_request_for_picks_entry() {
        let mut store = store();
        let mut ana = contact("Ana", "5551234567");
        ana.add_phone_number(PhoneNumber::new("5559876543").unwrap(), ContactType::Work);
        store.add_contact(ana).unwrap();
        store.add_contact(Contact::new("Empty")).unwrap();

        let request = store.dial_request_for("ana", Some(2)).unwrap();
        assert_eq!(request.number, "5559876543");
        assert_eq!(request.contact_name, "Ana");

        assert!(matches!(
            store.dial_request_for("Ana", None),
            Err(PhoneError::InvalidSelection(_))
        ));
        assert!(matches!(
            store.dial_request_for("Ana", Some(3)),
            Err(PhoneError::InvalidSelection(_))
        ));
        assert!(matches!(
            store.dial_request_for("Empty", None),
            Err(PhoneError::NoPhoneNumbers(_))
        ));
        assert!(matches!(
            store.dial_request_for("Nobody", None),
            Err(PhoneError::ContactNotFound(_))
        ));
    }

    #[test]
    fn test_contact_lookup_returns_first_in_store_order() {
        let mut store = store();
        store.add_contact(contact("Ana", "5551234567")).unwrap();
        store.add_contact(contact("Bob", "5551234567")).unwrap();
        assert_eq!(
            store.contact_name_for("5551234567"),
            Some("Ana".to_string())
        );
        assert_eq!(store.contact_name_for("5550000000"), None);
    }
}

//! Performance benchmarks for contact search.
//!
//! These benchmarks measure the linear scans behind contact lookup:
//! - Search by name (case-insensitive substring)
//! - Search by number (cleaned substring)
//! - Reverse lookup used when dialing
//! - Different contact list sizes

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sphone::error::StoreResult;
use sphone::models::{Contact, ContactType};
use sphone::repositories::Repository;
use sphone::services::{ContactLookup, ContactStore};
use sphone::PhoneNumber;
use std::hint::black_box;

/// Repository that never touches disk.
struct InMemoryRepository {
    items: Vec<Contact>,
}

impl Repository<Contact> for InMemoryRepository {
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

/// Build a store with `count` contacts, each holding a home and a work number.
fn create_store(count: usize) -> ContactStore {
    let items = (0..count)
        .map(|i| {
            let home = PhoneNumber::new(format!("555{:07}", i)).expect("valid home number");
            let work = PhoneNumber::new(format!("800{:07}", i)).expect("valid work number");
            let mut contact = Contact::with_number(format!("Contact {}", i), home, ContactType::Home);
            contact.add_phone_number(work, ContactType::Work);
            contact
        })
        .collect();

    ContactStore::new(Box::new(InMemoryRepository { items }))
}

fn bench_search_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_name");

    for size in [100, 1_000, 10_000] {
        let store = create_store(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| store.search_by_name(black_box("contact 99")).len())
        });
    }

    group.finish();
}

fn bench_search_by_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_by_number");

    for size in [100, 1_000, 10_000] {
        let store = create_store(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| store.search_by_number(black_box("800-000-99")).len())
        });
    }

    group.finish();
}

fn bench_contact_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("contact_lookup");

    for size in [100, 1_000, 10_000] {
        let store = create_store(size);
        let last = format!("800{:07}", size - 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| store.contact_name_for(black_box(&last)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_search_by_name,
    bench_search_by_number,
    bench_contact_lookup
);
criterion_main!(benches);

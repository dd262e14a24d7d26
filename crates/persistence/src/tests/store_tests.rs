// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{FullRegistry, create_full_registry, create_populated_context, today};
use crate::{JsonStore, PersistenceError};
use spa_center::{Booking, BookingId, Customer, Employee, Snapshot, SpaContext};
use spa_center_domain::{BookingStatus, Branch, DutyKind, PaymentMethod, Pesel, Seniority};
use std::fs;
use tempfile::TempDir;
use time::macros::{date, datetime, time};

fn create_store(dir: &TempDir) -> JsonStore {
    JsonStore::new(dir.path().join("spa-center.json"))
}

#[test]
fn test_save_clear_load_restores_registry() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    let (mut ctx, booking): (SpaContext, BookingId) = create_populated_context();
    let before: Snapshot = ctx.snapshot();

    store.save(&ctx);
    ctx.clear();
    assert!(ctx.persons().is_empty());
    store.load(&mut ctx).unwrap();

    assert_eq!(ctx.snapshot(), before);
    assert_eq!(ctx.persons().len(), 2);
    assert_eq!(ctx.bookings().len(), 1);
    assert!(ctx.booking_employee(booking).is_some());
    assert_eq!(ctx.today(), today());
}

#[test]
fn test_written_file_uses_readable_dates() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    let (ctx, _): (SpaContext, BookingId) = create_populated_context();

    store.write(&ctx).unwrap();
    let content: String = fs::read_to_string(store.path()).unwrap();

    assert!(content.contains("\"hire_date\": \"2020-01-01\""));
    assert!(content.contains("\"date\": \"2026-03-16T10:00:00\""));
    assert!(content.contains("\"payment_method\": \"AtTheSpa\""));
}

#[test]
fn test_load_missing_file_reports_not_found() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    let (mut ctx, _): (SpaContext, BookingId) = create_populated_context();

    let result: Result<(), PersistenceError> = store.load(&mut ctx);

    assert!(matches!(result, Err(PersistenceError::NotFound(_))));
    assert_eq!(ctx.persons().len(), 2);
}

#[test]
fn test_load_corrupt_file_keeps_context() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    fs::write(store.path(), "{ not json").unwrap();
    let (mut ctx, _): (SpaContext, BookingId) = create_populated_context();
    let before: Snapshot = ctx.snapshot();

    let result: Result<(), PersistenceError> = store.load(&mut ctx);

    assert!(result.is_ok());
    assert_eq!(ctx.snapshot(), before);
}

#[test]
fn test_read_corrupt_file_propagates_serialization_error() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    fs::write(store.path(), "{ not json").unwrap();

    let result: Result<SpaContext, PersistenceError> = store.read(Some(today()));

    assert!(matches!(result, Err(PersistenceError::Serialization(_))));
}

#[test]
fn test_read_inconsistent_file_reports_restore_error() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    fs::write(
        store.path(),
        r#"{ "customers": [ { "id": 1, "person": 7, "date_of_birth": "2000-01-01" } ] }"#,
    )
    .unwrap();

    let result: Result<SpaContext, PersistenceError> = store.read(Some(today()));

    assert!(matches!(result, Err(PersistenceError::Restore(_))));
}

#[test]
fn test_save_to_missing_directory_does_not_panic() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = JsonStore::new(dir.path().join("missing").join("spa-center.json"));
    let (ctx, _): (SpaContext, BookingId) = create_populated_context();

    store.save(&ctx);

    assert!(!store.path().exists());
}

#[test]
fn test_not_found_message_names_the_file() {
    let err: PersistenceError = PersistenceError::NotFound("data/spa.json".into());

    assert_eq!(err.to_string(), "File not found: data/spa.json");
}

#[test]
fn test_write_read_preserves_every_entity() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    let full: FullRegistry = create_full_registry();

    store.write(&full.ctx).unwrap();
    let ctx: SpaContext = store.read(Some(today())).unwrap();

    assert_eq!(ctx.persons().len(), 5);
    assert_eq!(ctx.employees().len(), 4);
    assert_eq!(ctx.services().len(), 3);
    assert_eq!(ctx.rooms().len(), 2);

    let mid: &Employee = ctx.employee(full.mid).unwrap();
    assert_eq!(mid.pesel().as_str(), "12345678901");
    assert_eq!(mid.hire_date(), date!(2015 - 09 - 01));
    assert_eq!(mid.leave_date(), None);
    assert!((mid.years_of_experience() - 4.5).abs() < f64::EPSILON);
    assert!(mid.seniority().is_mid());
    assert_eq!(mid.duties().kinds(), vec![DutyKind::Therapist]);
    assert_eq!(ctx.employee_services(full.mid), vec![full.massage, full.wellness]);
    assert_eq!(
        ctx.person(mid.person()).unwrap().email(),
        "maria@example.com"
    );

    let Seniority::Junior(profile) = ctx.employee(full.junior).unwrap().seniority() else {
        panic!("Expected a junior");
    };
    assert_eq!(profile.learning_period(), 6);
    assert_eq!(ctx.supervisors_of(full.junior), vec![full.mid]);

    let senior: &Employee = ctx.employee(full.senior).unwrap();
    assert_eq!(senior.leave_date(), Some(date!(2025 - 12 - 31)));
    let Seniority::Senior(profile) = senior.seniority() else {
        panic!("Expected a senior");
    };
    assert!((profile.bonus_coefficient() - 0.25).abs() < f64::EPSILON);
    assert_eq!(
        senior.duties().receptionist().unwrap().languages(),
        ["Polish", "English"]
    );

    let unassigned: &Employee = ctx.employee(full.unassigned).unwrap();
    assert!(!unassigned.seniority().is_assigned());
    assert_eq!(
        unassigned.duties().nail_technician().unwrap().certification_level(),
        4
    );
    assert_eq!(ctx.employee_branch(full.unassigned), None);

    let customer: &Customer = ctx.customer(full.customer).unwrap();
    assert_eq!(customer.date_of_birth(), date!(2000 - 01 - 01));
    assert!(customer.is_logged_in());

    assert_eq!(ctx.sub_services(full.wellness).len(), 2);
    assert_eq!(ctx.part_of(full.massage), vec![full.wellness]);

    let branch: &Branch = ctx.branch(full.branch).unwrap();
    assert_eq!(branch.name(), "Old Town");
    assert_eq!(branch.address().city(), "Krakow");
    assert_eq!(branch.opening_hours().opening(), time!(8:00));
    assert_eq!(branch.opening_hours().closing(), time!(20:00));
    assert_eq!(ctx.branch_rooms(full.branch).len(), 2);
    assert_eq!(
        ctx.branch_employee(full.branch, &Pesel::new("34567890123").unwrap()),
        Some(full.senior)
    );

    let completed: &Booking = ctx.booking(full.completed).unwrap();
    assert_eq!(completed.date(), datetime!(2026 - 03 - 16 10:00));
    assert_eq!(completed.status(), BookingStatus::Completed);
    assert_eq!(completed.payment_method(), PaymentMethod::AtTheSpa);
    assert_eq!(ctx.booking_employee(full.completed), Some(full.mid));
    let accepted: &Booking = ctx.booking(full.accepted).unwrap();
    assert_eq!(accepted.status(), BookingStatus::Accepted);
    assert_eq!(accepted.payment_method(), PaymentMethod::PaymentGateway);
    assert_eq!(ctx.booking_customer(full.accepted), Some(full.customer));
    assert_eq!(ctx.booking_employee(full.accepted), Some(full.junior));

    assert_eq!(ctx.snapshot(), full.ctx.snapshot());
}

#[test]
fn test_written_file_omits_absent_leave_date() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    let full: FullRegistry = create_full_registry();

    store.write(&full.ctx).unwrap();
    let content: String = fs::read_to_string(store.path()).unwrap();

    assert_eq!(content.matches("\"leave_date\"").count(), 1);
    assert!(!content.contains("null"));
}

#[test]
fn test_load_file_with_invalid_field_keeps_context() {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let store: JsonStore = create_store(&dir);
    let full: FullRegistry = create_full_registry();
    store.write(&full.ctx).unwrap();
    let content: String = fs::read_to_string(store.path()).unwrap();
    fs::write(
        store.path(),
        content.replace("\"humidity\": 45.0", "\"humidity\": 250.0"),
    )
    .unwrap();

    let read: Result<SpaContext, PersistenceError> = store.read(Some(today()));
    let (mut ctx, _): (SpaContext, BookingId) = create_populated_context();
    let before: Snapshot = ctx.snapshot();
    store.load(&mut ctx).unwrap();

    let Err(PersistenceError::Serialization(err)) = read else {
        panic!("Expected a serialization error");
    };
    assert!(err.to_string().contains("Humidity level must be between 0% and 100%"));
    assert_eq!(ctx.snapshot(), before);
}

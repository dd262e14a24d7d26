// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    at, create_test_context, create_test_customer, create_test_employee, create_test_person,
    create_test_terms, date, today, tomorrow_at,
};
use crate::{BookingId, CoreError, CustomerId, EmployeeId, ServiceId, SpaContext};
use spa_center_domain::{BookingStatus, DomainError, PaymentMethod, Service};
use time::Month;

struct Fixture {
    ctx: SpaContext,
    customer: CustomerId,
    service: ServiceId,
    employee: EmployeeId,
}

fn create_fixture() -> Fixture {
    let mut ctx: SpaContext = create_test_context();
    let service: ServiceId = ctx.create_service(
        Service::new("Massage", "Relaxing full body massage", 60, 200.0, 16).unwrap(),
    )
    .unwrap();
    let employee: EmployeeId = ctx
        .create_employee(create_test_person("Jan"), create_test_terms(1), &[service])
        .unwrap();
    let customer: CustomerId = create_test_customer(&mut ctx);
    Fixture {
        ctx,
        customer,
        service,
        employee,
    }
}

#[test]
fn test_booking_for_tomorrow_is_accepted() {
    let mut f: Fixture = create_fixture();

    let booking: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    assert_eq!(f.ctx.booking(booking).unwrap().status(), BookingStatus::Accepted);
    assert_eq!(
        f.ctx.booking(booking).unwrap().payment_method(),
        PaymentMethod::AtTheSpa
    );
    assert_eq!(f.ctx.booking_customer(booking), Some(f.customer));
    assert_eq!(f.ctx.booking_service(booking), Some(f.service));
    assert_eq!(f.ctx.booking_employee(booking), Some(f.employee));
    assert_eq!(f.ctx.customer_bookings(f.customer), vec![booking]);
    assert_eq!(f.ctx.service_bookings(f.service), vec![booking]);
    assert_eq!(f.ctx.employee_bookings(f.employee), vec![booking]);
}

#[test]
fn test_second_booking_at_same_time_conflicts() {
    let mut f: Fixture = create_fixture();
    f.ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    let result: Result<BookingId, CoreError> = f.ctx.create_booking(
        f.customer,
        f.service,
        f.employee,
        tomorrow_at(10),
        PaymentMethod::PaymentGateway,
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::IllegalOperation(String::from("Employee already has appointment at this time"))
    );
    assert_eq!(f.ctx.bookings().len(), 1);
    assert_eq!(f.ctx.employee_bookings(f.employee).len(), 1);
}

#[test]
fn test_same_day_different_hour_is_free() {
    let mut f: Fixture = create_fixture();
    f.ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    let result: Result<BookingId, CoreError> = f.ctx.create_booking(
        f.customer,
        f.service,
        f.employee,
        tomorrow_at(11),
        PaymentMethod::AtTheSpa,
    );

    assert!(result.is_ok());
    assert!(f.ctx.appointment_conflicts().is_empty());
}

#[test]
fn test_booking_today_is_allowed_but_yesterday_is_not() {
    let mut f: Fixture = create_fixture();

    let today_booking: Result<BookingId, CoreError> = f.ctx.create_booking(
        f.customer,
        f.service,
        f.employee,
        at(today(), 8),
        PaymentMethod::AtTheSpa,
    );
    let past_booking: Result<BookingId, CoreError> = f.ctx.create_booking(
        f.customer,
        f.service,
        f.employee,
        at(date(2026, Month::March, 14), 8),
        PaymentMethod::AtTheSpa,
    );

    assert!(today_booking.is_ok());
    assert_eq!(
        past_booking.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidValue(
            "Booking can't be planned on date earlier than today"
        ))
    );
    assert_eq!(f.ctx.bookings().len(), 1);
}

#[test]
fn test_set_booking_employee_moves_the_link() {
    let mut f: Fixture = create_fixture();
    let other: EmployeeId = create_test_employee(&mut f.ctx, "Ola", 2);
    let booking: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    f.ctx.set_booking_employee(booking, other).unwrap();

    assert_eq!(f.ctx.booking_employee(booking), Some(other));
    assert!(f.ctx.employee_bookings(f.employee).is_empty());
    assert_eq!(f.ctx.employee_bookings(other), vec![booking]);
}

#[test]
fn test_set_booking_employee_rejects_busy_employee() {
    let mut f: Fixture = create_fixture();
    let other: EmployeeId = create_test_employee(&mut f.ctx, "Ola", 2);
    let booking: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();
    f.ctx
        .create_booking(
            f.customer,
            f.service,
            other,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    let result: Result<(), CoreError> = f.ctx.assign_booking_to_employee(other, booking);

    assert!(matches!(result, Err(CoreError::IllegalOperation(_))));
    assert_eq!(f.ctx.booking_employee(booking), Some(f.employee));
}

#[test]
fn test_remove_booking_keeps_it_in_extent_without_links() {
    let mut f: Fixture = create_fixture();
    let booking: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    f.ctx.remove_booking(booking).unwrap();

    assert!(f.ctx.bookings().contains(booking));
    assert_eq!(f.ctx.booking_customer(booking), None);
    assert_eq!(f.ctx.booking_service(booking), None);
    assert_eq!(f.ctx.booking_employee(booking), None);
    assert!(f.ctx.customer_bookings(f.customer).is_empty());
    assert!(f.ctx.employee_bookings(f.employee).is_empty());
}

#[test]
fn test_delete_booking_frees_the_slot() {
    let mut f: Fixture = create_fixture();
    let booking: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    f.ctx.delete_booking(booking).unwrap();
    let again: Result<BookingId, CoreError> = f.ctx.create_booking(
        f.customer,
        f.service,
        f.employee,
        tomorrow_at(10),
        PaymentMethod::AtTheSpa,
    );

    assert!(again.is_ok());
    assert!(!f.ctx.bookings().contains(booking));
}

#[test]
fn test_unassign_booking_from_employee_detaches_only_employee() {
    let mut f: Fixture = create_fixture();
    let booking: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    f.ctx
        .unassign_booking_from_employee(f.employee, booking)
        .unwrap();

    assert_eq!(f.ctx.booking_employee(booking), None);
    assert_eq!(f.ctx.booking_customer(booking), Some(f.customer));
}

#[test]
fn test_reschedule_booking_checks_collisions() {
    let mut f: Fixture = create_fixture();
    let first: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();
    f.ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(12),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    let clash: Result<(), CoreError> = f.ctx.reschedule_booking(first, tomorrow_at(12));
    f.ctx.reschedule_booking(first, tomorrow_at(14)).unwrap();

    assert!(matches!(clash, Err(CoreError::IllegalOperation(_))));
    assert_eq!(f.ctx.booking(first).unwrap().date(), tomorrow_at(14));
}

#[test]
fn test_booking_status_transitions() {
    let mut f: Fixture = create_fixture();
    let booking: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    f.ctx
        .change_booking_status(booking, BookingStatus::Completed)
        .unwrap();
    let result: Result<(), CoreError> =
        f.ctx.change_booking_status(booking, BookingStatus::Canceled);

    assert_eq!(
        result.unwrap_err(),
        CoreError::IllegalOperation(String::from(
            "Booking status can't change from Completed to Canceled"
        ))
    );
    assert_eq!(f.ctx.booking(booking).unwrap().status(), BookingStatus::Completed);
}

#[test]
fn test_payment_method_can_be_changed() {
    let mut f: Fixture = create_fixture();
    let booking: BookingId = f
        .ctx
        .create_booking(
            f.customer,
            f.service,
            f.employee,
            tomorrow_at(10),
            PaymentMethod::AtTheSpa,
        )
        .unwrap();

    f.ctx
        .booking_mut(booking)
        .unwrap()
        .set_payment_method(PaymentMethod::PaymentGateway);

    assert_eq!(
        f.ctx.booking(booking).unwrap().payment_method(),
        PaymentMethod::PaymentGateway
    );
}

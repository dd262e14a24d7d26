// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod store_tests;

use spa_center::{BookingId, BranchId, CustomerId, EmployeeId, EmploymentTerms, ServiceId, SpaContext};
use spa_center_domain::{
    Address, BookingStatus, Branch, Duties, NailTechnicianDuty, OpeningHours, PaymentMethod,
    Person, Pesel, ReceptionistDuty, Room, Service, TherapistDuty,
};
use time::macros::time;
use time::{Date, Month, PrimitiveDateTime, Time};

pub fn today() -> Date {
    Date::from_calendar_date(2026, Month::March, 15).expect("Valid test date")
}

/// Builds a registry with one of everything and a booking for tomorrow.
pub fn create_populated_context() -> (SpaContext, BookingId) {
    let mut ctx: SpaContext = SpaContext::with_today(today());
    let massage: ServiceId = ctx.create_service(
        Service::new("Massage", "Relaxing full body massage", 60, 200.0, 16).unwrap(),
    )
    .unwrap();
    let employee: EmployeeId = ctx
        .create_employee(
            Person::new("Jan", "Kowalski", "jan@example.com", "123456789").unwrap(),
            EmploymentTerms::new(
                Pesel::new("12345678901").unwrap(),
                Date::from_calendar_date(2020, Month::January, 1).unwrap(),
                3.0,
            ),
            &[massage],
        )
        .unwrap();
    let customer: CustomerId = ctx
        .create_customer(
            Person::new("Anna", "Nowak", "anna@example.com", "987654321").unwrap(),
            Date::from_calendar_date(2000, Month::January, 1).unwrap(),
        )
        .unwrap();
    let address: Address = Address::new("Main Street", 10, "Warsaw", "00-001", "Poland").unwrap();
    let branch: BranchId = ctx
        .create_branch(
            Branch::new("Downtown", address, vec![String::from("123456789")]).unwrap(),
            vec![Room::new(1, "Sauna", 80.0, 15.0).unwrap()],
        )
        .unwrap();
    ctx.add_employee_to_branch(branch, employee).unwrap();
    let tomorrow: PrimitiveDateTime = PrimitiveDateTime::new(
        today().next_day().unwrap(),
        Time::from_hms(10, 0, 0).unwrap(),
    );
    let booking: BookingId = ctx
        .create_booking(customer, massage, employee, tomorrow, PaymentMethod::AtTheSpa)
        .unwrap();
    (ctx, booking)
}

/// Identifiers of a registry holding every entity kind and seniority level.
pub struct FullRegistry {
    pub ctx: SpaContext,
    pub massage: ServiceId,
    pub wellness: ServiceId,
    pub mid: EmployeeId,
    pub junior: EmployeeId,
    pub senior: EmployeeId,
    pub unassigned: EmployeeId,
    pub customer: CustomerId,
    pub branch: BranchId,
    pub completed: BookingId,
    pub accepted: BookingId,
}

fn create_terms(pesel: &str, hire_year: i32) -> EmploymentTerms {
    EmploymentTerms::new(
        Pesel::new(pesel).unwrap(),
        Date::from_calendar_date(hire_year, Month::September, 1).unwrap(),
        4.5,
    )
}

fn tomorrow_at(hour: u8) -> PrimitiveDateTime {
    PrimitiveDateTime::new(
        today().next_day().unwrap(),
        Time::from_hms(hour, 0, 0).unwrap(),
    )
}

pub fn create_full_registry() -> FullRegistry {
    let mut ctx: SpaContext = SpaContext::with_today(today());
    let massage: ServiceId = ctx
        .create_service(Service::new("Massage", "Relaxing full body massage", 60, 200.0, 16).unwrap())
        .unwrap();
    let sauna: ServiceId = ctx
        .create_service(Service::new("Sauna", "Finnish sauna session", 30, 50.0, 18).unwrap())
        .unwrap();
    let wellness: ServiceId = ctx
        .create_service(Service::new("Wellness Day", "Massage and sauna", 90, 230.0, 18).unwrap())
        .unwrap();
    ctx.add_sub_service(wellness, massage).unwrap();
    ctx.add_sub_service(wellness, sauna).unwrap();

    let mid: EmployeeId = ctx
        .create_employee(
            Person::new("Maria", "Wisniewska", "maria@example.com", "501234567").unwrap(),
            create_terms("12345678901", 2015).with_duties(
                Duties::new()
                    .with_therapist(TherapistDuty::new(vec![String::from("Shiatsu")]).unwrap()),
            ),
            &[massage, wellness],
        )
        .unwrap();
    let junior: EmployeeId = ctx
        .create_employee(
            Person::new("Ola", "Lewandowska", "ola@example.com", "502345678").unwrap(),
            create_terms("23456789012", 2024),
            &[sauna],
        )
        .unwrap();
    let senior: EmployeeId = ctx
        .create_employee(
            Person::new("Ewa", "Kaminska", "ewa@example.com", "503456789").unwrap(),
            create_terms("34567890123", 2010)
                .with_leave_date(Date::from_calendar_date(2025, Month::December, 31).unwrap())
                .with_duties(Duties::new().with_receptionist(
                    ReceptionistDuty::new(vec![String::from("Polish"), String::from("English")])
                        .unwrap(),
                )),
            &[wellness],
        )
        .unwrap();
    let unassigned: EmployeeId = ctx
        .create_employee(
            Person::new("Piotr", "Zielinski", "piotr@example.com", "504567890").unwrap(),
            create_terms("45678901234", 2022).with_duties(
                Duties::new().with_nail_technician(NailTechnicianDuty::new(4).unwrap()),
            ),
            &[sauna],
        )
        .unwrap();
    ctx.assign_mid(mid).unwrap();
    ctx.assign_junior(junior, 6, &[mid]).unwrap();
    ctx.assign_senior(senior, 0.25).unwrap();

    let customer: CustomerId = ctx
        .create_customer(
            Person::new("Anna", "Nowak", "anna@example.com", "987654321").unwrap(),
            Date::from_calendar_date(2000, Month::January, 1).unwrap(),
        )
        .unwrap();
    ctx.customer_mut(customer).unwrap().login();

    let address: Address = Address::new("Rynek", 12, "Krakow", "31-042", "Poland").unwrap();
    let mut branch_value: Branch =
        Branch::new("Old Town", address, vec![String::from("+48 123456789")]).unwrap();
    branch_value.set_opening_hours(OpeningHours::new(time!(8:00), time!(20:00)).unwrap());
    let branch: BranchId = ctx
        .create_branch(
            branch_value,
            vec![
                Room::new(1, "Sauna", 85.0, 10.0).unwrap(),
                Room::new(2, "Massage room", 24.0, 45.0).unwrap(),
            ],
        )
        .unwrap();
    for employee in [mid, junior, senior] {
        ctx.add_employee_to_branch(branch, employee).unwrap();
    }

    let completed: BookingId = ctx
        .create_booking(customer, massage, mid, tomorrow_at(10), PaymentMethod::AtTheSpa)
        .unwrap();
    ctx.change_booking_status(completed, BookingStatus::Completed).unwrap();
    let accepted: BookingId = ctx
        .create_booking(customer, sauna, junior, tomorrow_at(12), PaymentMethod::PaymentGateway)
        .unwrap();

    FullRegistry {
        ctx,
        massage,
        wellness,
        mid,
        junior,
        senior,
        unassigned,
        customer,
        branch,
        completed,
        accepted,
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BranchId, CustomerId, EmployeeId, EmploymentTerms, ServiceId, SpaContext};
use spa_center_domain::{Address, Branch, Person, Pesel, Room, Service};
use time::{Date, Month, PrimitiveDateTime, Time};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("Valid test date")
}

/// The fixed reference date every test context is pinned to.
pub fn today() -> Date {
    date(2026, Month::March, 15)
}

pub fn at(day: Date, hour: u8) -> PrimitiveDateTime {
    PrimitiveDateTime::new(day, Time::from_hms(hour, 0, 0).expect("Valid test time"))
}

pub fn tomorrow_at(hour: u8) -> PrimitiveDateTime {
    at(today().next_day().expect("Valid test date"), hour)
}

pub fn create_test_context() -> SpaContext {
    SpaContext::with_today(today())
}

pub fn create_test_person(name: &str) -> Person {
    Person::new(name, "Nowak", "someone@example.com", "+48 123456789").unwrap()
}

pub fn create_test_pesel(last_digit: u8) -> Pesel {
    Pesel::new(&format!("1234567890{last_digit}")).unwrap()
}

pub fn create_test_terms(last_digit: u8) -> EmploymentTerms {
    EmploymentTerms::new(
        create_test_pesel(last_digit),
        date(2020, Month::January, 1),
        5.0,
    )
}

pub fn create_massage(ctx: &mut SpaContext) -> ServiceId {
    ctx.create_service(Service::new("Massage", "Relaxing full body massage", 60, 200.0, 16).unwrap())
        .unwrap()
}

pub fn create_sauna(ctx: &mut SpaContext) -> ServiceId {
    ctx.create_service(Service::new("Sauna", "Finnish sauna session", 30, 50.0, 18).unwrap())
        .unwrap()
}

pub fn create_test_employee(ctx: &mut SpaContext, name: &str, last_digit: u8) -> EmployeeId {
    let first: Option<ServiceId> = ctx.services().ids().next();
    let service: ServiceId = match first {
        Some(id) => id,
        None => create_massage(ctx),
    };
    ctx.create_employee(create_test_person(name), create_test_terms(last_digit), &[service])
        .unwrap()
}

pub fn create_test_customer(ctx: &mut SpaContext) -> CustomerId {
    ctx.create_customer(
        Person::new("Anna", "Nowak", "anna.nowak@example.com", "123456789").unwrap(),
        date(2000, Month::January, 1),
    )
    .unwrap()
}

pub fn create_test_room(number: u32) -> Room {
    Room::new(number, "Sauna", 80.0, 15.0).unwrap()
}

pub fn create_test_branch(ctx: &mut SpaContext) -> BranchId {
    let address: Address = Address::new("Main Street", 10, "Warsaw", "00-001", "Poland").unwrap();
    let branch: Branch = Branch::new("Downtown", address, vec![String::from("123456789")]).unwrap();
    ctx.create_branch(branch, vec![create_test_room(1)]).unwrap()
}

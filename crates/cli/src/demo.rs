// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Demo data written by the `seed` command.

use spa_center::{BranchId, CoreError, CustomerId, EmployeeId, EmploymentTerms, ServiceId, SpaContext};
use spa_center_domain::{
    Address, Branch, Duties, NailTechnicianDuty, PaymentMethod, Person, Pesel, ReceptionistDuty,
    Room, SaunaSupervisorDuty, Service, TherapistDuty,
};
use time::{Date, Duration, Month, PrimitiveDateTime, Time};

/// Populates `ctx` with a small spa: one branch, four employees across all
/// seniority levels (one of whom left a month ago), a service bundle and
/// two bookings for tomorrow.
///
/// # Errors
///
/// Returns an error if any demo entity is rejected.
pub fn populate(ctx: &mut SpaContext) -> Result<(), CoreError> {
    let massage: ServiceId = ctx.create_service(Service::new(
        "Massage",
        "Relaxing full body massage",
        60,
        200.0,
        16,
    )?)?;
    let sauna: ServiceId = ctx.create_service(Service::new(
        "Sauna",
        "Finnish sauna session",
        30,
        50.0,
        18,
    )?)?;
    let manicure: ServiceId =
        ctx.create_service(Service::new("Manicure", "Classic manicure", 45, 90.0, 12)?)?;
    let wellness: ServiceId = ctx.create_service(Service::new(
        "Wellness Day",
        "Massage followed by a sauna session",
        90,
        230.0,
        18,
    )?)?;
    ctx.add_sub_service(wellness, massage)?;
    ctx.add_sub_service(wellness, sauna)?;

    let maria: EmployeeId = ctx.create_employee(
        Person::new("Maria", "Wisniewska", "maria@spa.example.com", "+48 501234567")?,
        terms("12345678901", 2015, 12.0)?.with_duties(
            Duties::new()
                .with_therapist(TherapistDuty::new(vec![String::from("Swedish massage")])?),
        ),
        &[massage, wellness],
    )?;
    let piotr: EmployeeId = ctx.create_employee(
        Person::new("Piotr", "Zielinski", "piotr@spa.example.com", "502345678")?,
        terms("23456789012", 2018, 6.5)?.with_duties(
            Duties::new()
                .with_sauna_supervisor(SaunaSupervisorDuty::new("Red Cross First Aid")?),
        ),
        &[sauna],
    )?;
    let ola: EmployeeId = ctx.create_employee(
        Person::new("Ola", "Lewandowska", "ola@spa.example.com", "503456789")?,
        terms("34567890123", 2024, 1.0)?.with_duties(
            Duties::new().with_nail_technician(NailTechnicianDuty::new(2)?),
        ),
        &[manicure],
    )?;
    let ewa: EmployeeId = ctx.create_employee(
        Person::new("Ewa", "Kaminska", "ewa@spa.example.com", "504567890")?,
        terms("45678901234", 2010, 20.0)?
            .with_leave_date(ctx.today() - Duration::days(30))
            .with_duties(Duties::new().with_receptionist(ReceptionistDuty::new(vec![
                String::from("Polish"),
                String::from("English"),
            ])?)),
        &[wellness],
    )?;

    ctx.assign_mid(piotr)?;
    ctx.assign_senior(maria, 0.15)?;
    ctx.assign_senior(ewa, 0.25)?;
    ctx.assign_junior(ola, 6, &[piotr])?;

    let branch: BranchId = ctx.create_branch(
        Branch::new(
            "Old Town",
            Address::new("Rynek", 12, "Krakow", "31-042", "Poland")?,
            vec![String::from("+48 123456789")],
        )?,
        vec![
            Room::new(1, "Sauna", 85.0, 10.0)?,
            Room::new(2, "Massage room", 24.0, 45.0)?,
        ],
    )?;
    for employee in [maria, piotr, ola, ewa] {
        ctx.add_employee_to_branch(branch, employee)?;
    }

    let anna: CustomerId = ctx.create_customer(
        Person::new("Anna", "Nowak", "anna.nowak@example.com", "600700800")?,
        date(2000, Month::January, 1)?,
    )?;
    let tomorrow: Date = ctx.today() + Duration::days(1);
    ctx.create_booking(anna, massage, maria, at(tomorrow, 10)?, PaymentMethod::AtTheSpa)?;
    ctx.create_booking(anna, sauna, piotr, at(tomorrow, 12)?, PaymentMethod::PaymentGateway)?;
    Ok(())
}

fn terms(pesel: &str, hire_year: i32, years_of_experience: f64) -> Result<EmploymentTerms, CoreError> {
    Ok(EmploymentTerms::new(
        Pesel::new(pesel)?,
        date(hire_year, Month::September, 1)?,
        years_of_experience,
    ))
}

fn date(year: i32, month: Month, day: u8) -> Result<Date, CoreError> {
    Date::from_calendar_date(year, month, day)
        .map_err(|err| CoreError::IllegalOperation(err.to_string()))
}

fn at(day: Date, hour: u8) -> Result<PrimitiveDateTime, CoreError> {
    let time: Time =
        Time::from_hms(hour, 0, 0).map_err(|err| CoreError::IllegalOperation(err.to_string()))?;
    Ok(PrimitiveDateTime::new(day, time))
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::entities::{Booking, Customer, Employee};
use crate::error::CoreError;
use crate::extent::Extent;
use crate::ids::{BookingId, BranchId, CustomerId, EmployeeId, PersonId, RoomId, ServiceId};
use crate::links::{KeyedLinks, Links};
use spa_center_domain::{Branch, Person, Pesel, Room, Service};
use time::{Date, OffsetDateTime};

/// The registry that owns every extent and association.
///
/// Operations that create, link or remove entities are implemented on this
/// type across the `people`, `catalog`, `booking`, `seniority` and `branch`
/// modules.
#[derive(Debug, Clone, Default)]
pub struct SpaContext {
    today: Option<Date>,

    pub(crate) persons: Extent<PersonId, Person>,
    pub(crate) customers: Extent<CustomerId, Customer>,
    pub(crate) employees: Extent<EmployeeId, Employee>,
    pub(crate) services: Extent<ServiceId, Service>,
    pub(crate) bookings: Extent<BookingId, Booking>,
    pub(crate) branches: Extent<BranchId, Branch>,
    pub(crate) rooms: Extent<RoomId, Room>,

    /// Employee provides service.
    pub(crate) provides: Links<EmployeeId, ServiceId>,
    /// Whole service consists of part service.
    pub(crate) parts: Links<ServiceId, ServiceId>,
    /// Mid supervises junior.
    pub(crate) supervision: Links<EmployeeId, EmployeeId>,
    pub(crate) customer_bookings: Links<CustomerId, BookingId>,
    pub(crate) service_bookings: Links<ServiceId, BookingId>,
    pub(crate) employee_bookings: Links<EmployeeId, BookingId>,
    /// Branch staff keyed by PESEL.
    pub(crate) staff: KeyedLinks<BranchId, Pesel, EmployeeId>,
    pub(crate) premises: Links<BranchId, RoomId>,
}

impl SpaContext {
    /// Creates an empty registry that uses the current UTC date as today.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry with a fixed reference date.
    #[must_use]
    pub fn with_today(today: Date) -> Self {
        Self {
            today: Some(today),
            ..Self::default()
        }
    }

    /// The reference date for every time-relative validation.
    #[must_use]
    pub fn today(&self) -> Date {
        self.today
            .unwrap_or_else(|| OffsetDateTime::now_utc().date())
    }

    /// Pins (or unpins with `None`) the reference date.
    pub const fn set_today(&mut self, today: Option<Date>) {
        self.today = today;
    }

    #[must_use]
    pub const fn pinned_today(&self) -> Option<Date> {
        self.today
    }

    /// Empties every extent and association. A pinned date is kept.
    pub fn clear(&mut self) {
        self.persons.clear();
        self.customers.clear();
        self.employees.clear();
        self.services.clear();
        self.bookings.clear();
        self.branches.clear();
        self.rooms.clear();

        self.provides.clear();
        self.parts.clear();
        self.supervision.clear();
        self.customer_bookings.clear();
        self.service_bookings.clear();
        self.employee_bookings.clear();
        self.staff.clear();
        self.premises.clear();
    }

    #[must_use]
    pub const fn persons(&self) -> &Extent<PersonId, Person> {
        &self.persons
    }

    #[must_use]
    pub const fn customers(&self) -> &Extent<CustomerId, Customer> {
        &self.customers
    }

    #[must_use]
    pub const fn employees(&self) -> &Extent<EmployeeId, Employee> {
        &self.employees
    }

    #[must_use]
    pub const fn services(&self) -> &Extent<ServiceId, Service> {
        &self.services
    }

    #[must_use]
    pub const fn bookings(&self) -> &Extent<BookingId, Booking> {
        &self.bookings
    }

    #[must_use]
    pub const fn branches(&self) -> &Extent<BranchId, Branch> {
        &self.branches
    }

    #[must_use]
    pub const fn rooms(&self) -> &Extent<RoomId, Room> {
        &self.rooms
    }

    /// Employees currently at the junior level.
    pub fn juniors(&self) -> impl Iterator<Item = (EmployeeId, &Employee)> + '_ {
        self.employees
            .iter()
            .filter(|(_, employee)| employee.seniority().is_junior())
    }

    /// Employees currently at the mid level.
    pub fn mids(&self) -> impl Iterator<Item = (EmployeeId, &Employee)> + '_ {
        self.employees
            .iter()
            .filter(|(_, employee)| employee.seniority().is_mid())
    }

    /// Employees currently at the senior level.
    pub fn seniors(&self) -> impl Iterator<Item = (EmployeeId, &Employee)> + '_ {
        self.employees
            .iter()
            .filter(|(_, employee)| employee.seniority().is_senior())
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn person(&self, id: PersonId) -> Result<&Person, CoreError> {
        self.persons.require(id)
    }

    /// Mutable access for validated field setters.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn person_mut(&mut self, id: PersonId) -> Result<&mut Person, CoreError> {
        self.persons.require_mut(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn customer(&self, id: CustomerId) -> Result<&Customer, CoreError> {
        self.customers.require(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn customer_mut(&mut self, id: CustomerId) -> Result<&mut Customer, CoreError> {
        self.customers.require_mut(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn employee(&self, id: EmployeeId) -> Result<&Employee, CoreError> {
        self.employees.require(id)
    }

    /// PESEL and seniority are not reachable from here; use
    /// [`SpaContext::set_employee_pesel`] and the seniority operations.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn employee_mut(&mut self, id: EmployeeId) -> Result<&mut Employee, CoreError> {
        self.employees.require_mut(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn service(&self, id: ServiceId) -> Result<&Service, CoreError> {
        self.services.require(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn service_mut(&mut self, id: ServiceId) -> Result<&mut Service, CoreError> {
        self.services.require_mut(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn booking(&self, id: BookingId) -> Result<&Booking, CoreError> {
        self.bookings.require(id)
    }

    /// Date and status are not reachable from here; use
    /// [`SpaContext::reschedule_booking`] and
    /// [`SpaContext::change_booking_status`].
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn booking_mut(&mut self, id: BookingId) -> Result<&mut Booking, CoreError> {
        self.bookings.require_mut(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn branch(&self, id: BranchId) -> Result<&Branch, CoreError> {
        self.branches.require(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn branch_mut(&mut self, id: BranchId) -> Result<&mut Branch, CoreError> {
        self.branches.require_mut(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn room(&self, id: RoomId) -> Result<&Room, CoreError> {
        self.rooms.require(id)
    }

    /// # Errors
    ///
    /// Returns `UnknownEntity` if the id is not live.
    pub fn room_mut(&mut self, id: RoomId) -> Result<&mut Room, CoreError> {
        self.rooms.require_mut(id)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bookings joining a customer, a service and an employee.

use crate::entities::Booking;
use crate::error::CoreError;
use crate::ids::{BookingId, CustomerId, EmployeeId, ServiceId};
use crate::state::SpaContext;
use spa_center_domain::{BookingStatus, PaymentMethod, validate_booking_date};
use time::PrimitiveDateTime;
use tracing::debug;

const APPOINTMENT_CONFLICT: &str = "Employee already has appointment at this time";

impl SpaContext {
    /// Books `service` for `customer` with `employee` at `date`.
    ///
    /// The booking starts as `Accepted` and is linked to all three ends.
    ///
    /// # Errors
    ///
    /// Returns an error if any id is unknown, the date lies before today, or
    /// the employee already has a booking at exactly `date`.
    pub fn create_booking(
        &mut self,
        customer: CustomerId,
        service: ServiceId,
        employee: EmployeeId,
        date: PrimitiveDateTime,
        payment_method: PaymentMethod,
    ) -> Result<BookingId, CoreError> {
        self.customers.ensure(customer)?;
        self.services.ensure(service)?;
        self.employees.ensure(employee)?;
        validate_booking_date(date, self.today())?;
        self.check_appointment_free(employee, date, None)?;

        let id: BookingId = self.bookings.insert(Booking::new(date, payment_method))?;
        self.customer_bookings.link(customer, id);
        self.service_bookings.link(service, id);
        self.employee_bookings.link(employee, id);
        debug!(%id, %customer, %service, %employee, %date, "Created booking");
        Ok(id)
    }

    /// Fails if `employee` has a booking other than `except` at `date`.
    fn check_appointment_free(
        &self,
        employee: EmployeeId,
        date: PrimitiveDateTime,
        except: Option<BookingId>,
    ) -> Result<(), CoreError> {
        let taken: bool = self
            .employee_bookings
            .rights_of(employee)
            .filter(|booking| Some(*booking) != except)
            .filter_map(|booking| self.bookings.get(booking))
            .any(|booking| booking.date() == date);
        if taken {
            return Err(CoreError::illegal(APPOINTMENT_CONFLICT));
        }
        Ok(())
    }

    /// Moves a booking to another employee. Setting the current employee
    /// again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown or the new employee already
    /// has a booking at the same time.
    pub fn set_booking_employee(
        &mut self,
        booking: BookingId,
        employee: EmployeeId,
    ) -> Result<(), CoreError> {
        let date: PrimitiveDateTime = self.bookings.require(booking)?.date();
        self.employees.ensure(employee)?;
        let current: Option<EmployeeId> = self.employee_bookings.left_of(booking);
        if current == Some(employee) {
            return Ok(());
        }
        self.check_appointment_free(employee, date, Some(booking))?;

        if let Some(previous) = current {
            self.employee_bookings.unlink(previous, booking);
        }
        self.employee_bookings.link(employee, booking);
        debug!(%booking, %employee, "Reassigned booking");
        Ok(())
    }

    /// Detaches the employee from a booking, if any.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the booking is not live.
    pub fn remove_booking_employee(&mut self, booking: BookingId) -> Result<(), CoreError> {
        self.bookings.ensure(booking)?;
        for employee in self.employee_bookings.detach_right(booking) {
            debug!(%booking, %employee, "Detached employee from booking");
        }
        Ok(())
    }

    /// Detaches the customer, service and employee from a booking.
    ///
    /// The booking itself stays in its extent with no links.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the booking is not live.
    pub fn remove_booking(&mut self, booking: BookingId) -> Result<(), CoreError> {
        self.bookings.ensure(booking)?;
        self.customer_bookings.detach_right(booking);
        self.service_bookings.detach_right(booking);
        self.employee_bookings.detach_right(booking);
        debug!(%booking, "Detached booking");
        Ok(())
    }

    /// Detaches a booking and removes it from its extent.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the booking is not live.
    pub fn delete_booking(&mut self, booking: BookingId) -> Result<Booking, CoreError> {
        self.remove_booking(booking)?;
        self.bookings.take(booking)
    }

    /// Moves a booking to a new date-time.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking is unknown, the date lies before
    /// today, or the booking's employee is busy at that time.
    pub fn reschedule_booking(
        &mut self,
        booking: BookingId,
        date: PrimitiveDateTime,
    ) -> Result<(), CoreError> {
        self.bookings.ensure(booking)?;
        validate_booking_date(date, self.today())?;
        if let Some(employee) = self.employee_bookings.left_of(booking) {
            self.check_appointment_free(employee, date, Some(booking))?;
        }
        self.bookings.require_mut(booking)?.set_date(date);
        debug!(%booking, %date, "Rescheduled booking");
        Ok(())
    }

    /// Moves a booking to `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking is unknown or the transition is not
    /// allowed (only `Accepted` may move, to `Completed` or `Canceled`).
    pub fn change_booking_status(
        &mut self,
        booking: BookingId,
        status: BookingStatus,
    ) -> Result<(), CoreError> {
        let entry: &mut Booking = self.bookings.require_mut(booking)?;
        let from: BookingStatus = entry.status();
        if !from.can_transition_to(status) {
            return Err(CoreError::illegal(format!(
                "Booking status can't change from {from} to {status}"
            )));
        }
        entry.set_status(status);
        debug!(%booking, %from, to = %status, "Changed booking status");
        Ok(())
    }

    /// Employee-side alias for [`SpaContext::set_booking_employee`].
    ///
    /// # Errors
    ///
    /// See [`SpaContext::set_booking_employee`].
    pub fn assign_booking_to_employee(
        &mut self,
        employee: EmployeeId,
        booking: BookingId,
    ) -> Result<(), CoreError> {
        self.set_booking_employee(booking, employee)
    }

    /// Detaches `booking` from `employee` if it is assigned to them.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if either id is not live.
    pub fn unassign_booking_from_employee(
        &mut self,
        employee: EmployeeId,
        booking: BookingId,
    ) -> Result<(), CoreError> {
        self.employees.ensure(employee)?;
        if self.employee_bookings.left_of(booking) == Some(employee) {
            self.remove_booking_employee(booking)?;
        } else {
            self.bookings.ensure(booking)?;
        }
        Ok(())
    }

    /// Pairs of bookings that share an employee and a date-time.
    ///
    /// Always empty for a registry built through the operations above.
    #[must_use]
    pub fn appointment_conflicts(&self) -> Vec<(BookingId, BookingId)> {
        let mut conflicts: Vec<(BookingId, BookingId)> = Vec::new();
        for employee in self.employees.ids() {
            let booked: Vec<(BookingId, PrimitiveDateTime)> = self
                .employee_bookings
                .rights_of(employee)
                .filter_map(|id| self.bookings.get(id).map(|booking| (id, booking.date())))
                .collect();
            for (index, (first, date)) in booked.iter().enumerate() {
                for (second, other) in &booked[index + 1..] {
                    if date == other {
                        conflicts.push((*first, *second));
                    }
                }
            }
        }
        conflicts
    }

    #[must_use]
    pub fn booking_customer(&self, booking: BookingId) -> Option<CustomerId> {
        self.customer_bookings.left_of(booking)
    }

    #[must_use]
    pub fn booking_service(&self, booking: BookingId) -> Option<ServiceId> {
        self.service_bookings.left_of(booking)
    }

    #[must_use]
    pub fn booking_employee(&self, booking: BookingId) -> Option<EmployeeId> {
        self.employee_bookings.left_of(booking)
    }

    #[must_use]
    pub fn customer_bookings(&self, customer: CustomerId) -> Vec<BookingId> {
        self.customer_bookings.rights_of(customer).collect()
    }

    #[must_use]
    pub fn service_bookings(&self, service: ServiceId) -> Vec<BookingId> {
        self.service_bookings.rights_of(service).collect()
    }

    #[must_use]
    pub fn employee_bookings(&self, employee: EmployeeId) -> Vec<BookingId> {
        self.employee_bookings.rights_of(employee).collect()
    }
}

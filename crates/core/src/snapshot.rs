// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable image of a whole registry.
//!
//! Each record carries its id and flat fields. Associations are embedded as
//! ids on one end only: employees list their services and supervisors,
//! services their direct parts, bookings their three ends, branches their
//! staff and rooms their owning branch.

use crate::entities::{Booking, Customer, Employee};
use crate::error::CoreError;
use crate::ids::{BookingId, BranchId, CustomerId, EmployeeId, PersonId, RoomId, ServiceId};
use crate::state::SpaContext;
use serde::{Deserialize, Serialize};
use spa_center_domain::{Branch, DomainError, Person, Room, Service};
use std::collections::BTreeSet;
use time::Date;
use tracing::debug;

/// An entity together with its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<I, T> {
    pub id: I,
    #[serde(flatten)]
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    #[serde(flatten)]
    pub employee: Employee,
    pub services: Vec<ServiceId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supervisors: Vec<EmployeeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,
    #[serde(flatten)]
    pub service: Service,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_services: Vec<ServiceId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: BookingId,
    #[serde(flatten)]
    pub booking: Booking,
    #[serde(default)]
    pub customer: Option<CustomerId>,
    #[serde(default)]
    pub service: Option<ServiceId>,
    #[serde(default)]
    pub employee: Option<EmployeeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRecord {
    pub id: BranchId,
    #[serde(flatten)]
    pub branch: Branch,
    #[serde(default)]
    pub employees: Vec<EmployeeId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: RoomId,
    pub branch: BranchId,
    #[serde(flatten)]
    pub room: Room,
}

/// Every extent of a registry, with associations embedded in the records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub persons: Vec<Record<PersonId, Person>>,
    #[serde(default)]
    pub customers: Vec<Record<CustomerId, Customer>>,
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
    #[serde(default)]
    pub branches: Vec<BranchRecord>,
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
}

impl SpaContext {
    /// Captures every extent and association.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            persons: self
                .persons
                .iter()
                .map(|(id, person)| Record {
                    id,
                    value: person.clone(),
                })
                .collect(),
            customers: self
                .customers
                .iter()
                .map(|(id, customer)| Record {
                    id,
                    value: customer.clone(),
                })
                .collect(),
            employees: self
                .employees
                .iter()
                .map(|(id, employee)| EmployeeRecord {
                    id,
                    employee: employee.clone(),
                    services: self.provides.rights_of(id).collect(),
                    supervisors: self.supervision.lefts_of(id).collect(),
                })
                .collect(),
            services: self
                .services
                .iter()
                .map(|(id, service)| ServiceRecord {
                    id,
                    service: service.clone(),
                    sub_services: self.parts.rights_of(id).collect(),
                })
                .collect(),
            bookings: self
                .bookings
                .iter()
                .map(|(id, booking)| BookingRecord {
                    id,
                    booking: booking.clone(),
                    customer: self.customer_bookings.left_of(id),
                    service: self.service_bookings.left_of(id),
                    employee: self.employee_bookings.left_of(id),
                })
                .collect(),
            branches: self
                .branches
                .iter()
                .map(|(id, branch)| BranchRecord {
                    id,
                    branch: branch.clone(),
                    employees: self.staff.entries(id).map(|(_, employee)| employee).collect(),
                })
                .collect(),
            rooms: self
                .rooms
                .iter()
                .filter_map(|(id, room)| {
                    self.premises.left_of(id).map(|branch| RoomRecord {
                        id,
                        branch,
                        room: room.clone(),
                    })
                })
                .collect(),
        }
    }

    /// Builds a registry pinned to `today` (or using the current date when
    /// `None`) from a snapshot.
    ///
    /// Field values were validated when the records were deserialized;
    /// dates relative to today are checked here. Every association is
    /// re-established through the same checks as the live operations, so a
    /// snapshot with a dangling id, a cyclic service, a supervisor that is
    /// not a mid or a duplicate PESEL in a branch is rejected as a whole.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn restore(snapshot: Snapshot, today: Option<Date>) -> Result<Self, CoreError> {
        let mut ctx: Self = Self::default();
        ctx.set_today(today);
        let today: Date = ctx.today();
        let Snapshot {
            persons,
            customers,
            employees,
            services,
            bookings,
            branches,
            rooms,
        } = snapshot;

        ctx.persons
            .load(persons.into_iter().map(|record| (record.id, record.value)))?;
        ctx.services.load(
            services
                .iter()
                .map(|record| (record.id, record.service.clone())),
        )?;

        let mut roles: BTreeSet<PersonId> = BTreeSet::new();
        for record in &customers {
            ctx.persons.ensure(record.value.person())?;
            if !roles.insert(record.value.person()) {
                return Err(CoreError::illegal("Person already holds a customer role"));
            }
            record.value.validate(today)?;
        }
        ctx.customers
            .load(customers.into_iter().map(|record| (record.id, record.value)))?;

        roles.clear();
        for record in &employees {
            ctx.persons.ensure(record.employee.person())?;
            if !roles.insert(record.employee.person()) {
                return Err(CoreError::illegal("Person already holds an employee role"));
            }
            if record.services.is_empty() {
                return Err(DomainError::MissingValue(
                    "Employee must provide at least one service",
                )
                .into());
            }
            record.employee.validate(today)?;
        }
        ctx.employees.load(
            employees
                .iter()
                .map(|record| (record.id, record.employee.clone())),
        )?;

        for record in &employees {
            for service in &record.services {
                ctx.add_service_to_employee(record.id, *service)?;
            }
            for mid in &record.supervisors {
                ctx.add_junior_supervisor(record.id, *mid)?;
            }
        }

        for record in &services {
            for part in &record.sub_services {
                ctx.add_sub_service(record.id, *part)?;
            }
        }

        for record in &bookings {
            if let Some(customer) = record.customer {
                ctx.customers.ensure(customer)?;
            }
            if let Some(service) = record.service {
                ctx.services.ensure(service)?;
            }
            if let Some(employee) = record.employee {
                ctx.employees.ensure(employee)?;
            }
        }
        ctx.bookings.load(
            bookings
                .iter()
                .map(|record| (record.id, record.booking.clone())),
        )?;
        for record in bookings {
            if let Some(customer) = record.customer {
                ctx.customer_bookings.link(customer, record.id);
            }
            if let Some(service) = record.service {
                ctx.service_bookings.link(service, record.id);
            }
            if let Some(employee) = record.employee {
                ctx.employee_bookings.link(employee, record.id);
            }
        }

        ctx.branches.load(
            branches
                .iter()
                .map(|record| (record.id, record.branch.clone())),
        )?;
        for record in &branches {
            for employee in &record.employees {
                ctx.add_employee_to_branch(record.id, *employee)?;
            }
        }

        for record in &rooms {
            ctx.branches.ensure(record.branch)?;
        }
        ctx.rooms
            .load(rooms.iter().map(|record| (record.id, record.room.clone())))?;
        for record in rooms {
            ctx.premises.link(record.branch, record.id);
        }
        for record in &branches {
            if ctx.premises.right_count(record.id) == 0 {
                return Err(CoreError::illegal("Branch must have at least one room"));
            }
        }

        debug!(
            persons = ctx.persons.len(),
            employees = ctx.employees.len(),
            bookings = ctx.bookings.len(),
            "Restored registry"
        );
        Ok(ctx)
    }
}

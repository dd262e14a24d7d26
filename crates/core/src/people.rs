// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persons and their customer and employee roles.

use crate::entities::{Customer, Employee, EmploymentTerms};
use crate::error::CoreError;
use crate::ids::{CustomerId, EmployeeId, PersonId, ServiceId};
use crate::state::SpaContext;
use spa_center_domain::{DomainError, Person, Pesel, validate_birth_date};
use time::Date;
use tracing::debug;

const SERVICE_REQUIRED: &str = "Employee must provide at least one service";

impl SpaContext {
    /// Adds a person to the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if person identifiers are exhausted.
    pub fn register_person(&mut self, person: Person) -> Result<PersonId, CoreError> {
        let id: PersonId = self.persons.insert(person)?;
        debug!(%id, "Registered person");
        Ok(id)
    }

    /// Registers `person` and gives it a customer role in one step.
    ///
    /// Nothing is added if the date of birth is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the date of birth lies in the future.
    pub fn create_customer(
        &mut self,
        person: Person,
        date_of_birth: Date,
    ) -> Result<CustomerId, CoreError> {
        validate_birth_date(date_of_birth, self.today())?;
        let person_id: PersonId = self.register_person(person)?;
        self.assign_customer_role(person_id, date_of_birth)
    }

    /// Gives an existing person a customer role.
    ///
    /// # Errors
    ///
    /// Returns an error if the person is unknown, already a customer, or the
    /// date of birth lies in the future.
    pub fn assign_customer_role(
        &mut self,
        person: PersonId,
        date_of_birth: Date,
    ) -> Result<CustomerId, CoreError> {
        self.persons.ensure(person)?;
        if self.customer_of_person(person).is_some() {
            return Err(CoreError::illegal("Person already holds a customer role"));
        }
        validate_birth_date(date_of_birth, self.today())?;

        let id: CustomerId = self.customers.insert(Customer::new(person, date_of_birth))?;
        debug!(%id, %person, "Assigned customer role");
        Ok(id)
    }

    #[must_use]
    pub fn customer_of_person(&self, person: PersonId) -> Option<CustomerId> {
        self.customers
            .iter()
            .find(|(_, customer)| customer.person() == person)
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn employee_of_person(&self, person: PersonId) -> Option<EmployeeId> {
        self.employees
            .iter()
            .find(|(_, employee)| employee.person() == person)
            .map(|(id, _)| id)
    }

    /// Registers `person` and gives it an employee role in one step.
    ///
    /// Nothing is added if any term or service is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the terms are invalid, `services` is empty, or a
    /// service is unknown.
    pub fn create_employee(
        &mut self,
        person: Person,
        terms: EmploymentTerms,
        services: &[ServiceId],
    ) -> Result<EmployeeId, CoreError> {
        terms.validate(self.today())?;
        self.check_initial_services(services)?;
        let person_id: PersonId = self.register_person(person)?;
        self.assign_employee_role(person_id, terms, services)
    }

    /// Gives an existing person an employee role providing `services`.
    ///
    /// # Errors
    ///
    /// Returns an error if the person is unknown or already an employee, the
    /// terms are invalid, `services` is empty, or a service is unknown.
    pub fn assign_employee_role(
        &mut self,
        person: PersonId,
        terms: EmploymentTerms,
        services: &[ServiceId],
    ) -> Result<EmployeeId, CoreError> {
        self.persons.ensure(person)?;
        if self.employee_of_person(person).is_some() {
            return Err(CoreError::illegal("Person already holds an employee role"));
        }
        terms.validate(self.today())?;
        self.check_initial_services(services)?;

        let id: EmployeeId = self.employees.insert(Employee::new(person, terms))?;
        for service in services {
            self.provides.link(id, *service);
        }
        debug!(%id, %person, services = services.len(), "Assigned employee role");
        Ok(id)
    }

    fn check_initial_services(&self, services: &[ServiceId]) -> Result<(), CoreError> {
        if services.is_empty() {
            return Err(DomainError::MissingValue(SERVICE_REQUIRED).into());
        }
        for service in services {
            self.services.ensure(*service)?;
        }
        Ok(())
    }

    /// Links an employee to a service it provides. Linking twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if either id is not live.
    pub fn add_service_to_employee(
        &mut self,
        employee: EmployeeId,
        service: ServiceId,
    ) -> Result<(), CoreError> {
        self.employees.ensure(employee)?;
        self.services.ensure(service)?;
        if self.provides.link(employee, service) {
            debug!(%employee, %service, "Employee now provides service");
        }
        Ok(())
    }

    /// Unlinks an employee from a service. Unlinking a pair that is not
    /// linked is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown, or if this is the
    /// employee's last service.
    pub fn remove_service_from_employee(
        &mut self,
        employee: EmployeeId,
        service: ServiceId,
    ) -> Result<(), CoreError> {
        self.employees.ensure(employee)?;
        self.services.ensure(service)?;
        if !self.provides.contains(employee, service) {
            return Ok(());
        }
        if self.provides.right_count(employee) == 1 {
            return Err(CoreError::illegal(SERVICE_REQUIRED));
        }
        self.provides.unlink(employee, service);
        debug!(%employee, %service, "Employee no longer provides service");
        Ok(())
    }

    /// Services provided by `employee`.
    #[must_use]
    pub fn employee_services(&self, employee: EmployeeId) -> Vec<ServiceId> {
        self.provides.rights_of(employee).collect()
    }

    /// Employees providing `service`.
    #[must_use]
    pub fn service_providers(&self, service: ServiceId) -> Vec<EmployeeId> {
        self.provides.lefts_of(service).collect()
    }

    /// Changes the PESEL of an employee outside any branch.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee is unknown or belongs to a branch.
    pub fn set_employee_pesel(&mut self, employee: EmployeeId, pesel: Pesel) -> Result<(), CoreError> {
        self.employees.ensure(employee)?;
        if self.staff.owner_of(employee).is_some() {
            return Err(CoreError::illegal(
                "Employee PESEL must be updated through its branch",
            ));
        }
        self.employees.require_mut(employee)?.set_pesel(pesel);
        Ok(())
    }

    /// Mean duration in minutes of the services of the employee's bookings.
    ///
    /// Returns `0.0` when the employee has no booking with a service.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the employee is not live.
    pub fn employee_average_service_minutes(&self, employee: EmployeeId) -> Result<f64, CoreError> {
        self.employees.ensure(employee)?;
        let durations: Vec<u32> = self
            .employee_bookings
            .rights_of(employee)
            .filter_map(|booking| self.service_bookings.left_of(booking))
            .filter_map(|service| self.services.get(service))
            .map(spa_center_domain::Service::duration_minutes)
            .collect();
        if durations.is_empty() {
            return Ok(0.0);
        }
        let total: u32 = durations.iter().sum();
        Ok(f64::from(total) / f64::from(u32::try_from(durations.len()).unwrap_or(u32::MAX)))
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seniority levels and junior supervision.
//!
//! The level is a tagged variant on the employee. Every transition replaces
//! the variant in place and updates the supervision table in the same call,
//! so a promoted employee never keeps links that belong to its old level.

use crate::error::CoreError;
use crate::ids::EmployeeId;
use crate::state::SpaContext;
use spa_center_domain::{DomainError, JuniorProfile, Seniority, SeniorProfile};
use tracing::{debug, info};

const SUPERVISOR_REQUIRED: &str = "Junior must be supervised by at least one mid";
const NOT_A_JUNIOR: &str = "Employee is not a junior";

impl SpaContext {
    fn ensure_unassigned(&self, employee: EmployeeId) -> Result<(), CoreError> {
        if self.employees.require(employee)?.seniority().is_assigned() {
            return Err(CoreError::illegal("Employee already has a seniority level"));
        }
        Ok(())
    }

    fn ensure_mid(&self, employee: EmployeeId) -> Result<(), CoreError> {
        if !self.employees.require(employee)?.seniority().is_mid() {
            return Err(CoreError::illegal("Supervisor must be a mid"));
        }
        Ok(())
    }

    fn ensure_junior(&self, employee: EmployeeId) -> Result<(), CoreError> {
        if !self.employees.require(employee)?.seniority().is_junior() {
            return Err(CoreError::illegal(NOT_A_JUNIOR));
        }
        Ok(())
    }

    fn ensure_promotion(
        &self,
        employee: EmployeeId,
        target: &Seniority,
        rejection: &'static str,
    ) -> Result<(), CoreError> {
        if !self.employees.require(employee)?.seniority().can_promote_to(target) {
            return Err(CoreError::illegal(rejection));
        }
        Ok(())
    }

    /// Makes an unassigned employee a junior supervised by `mids`.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee already has a level, `mids` is
    /// empty, or any supervisor is unknown or not a mid.
    pub fn assign_junior(
        &mut self,
        employee: EmployeeId,
        learning_period: u32,
        mids: &[EmployeeId],
    ) -> Result<(), CoreError> {
        self.ensure_unassigned(employee)?;
        if mids.is_empty() {
            return Err(DomainError::MissingValue(SUPERVISOR_REQUIRED).into());
        }
        for mid in mids {
            self.ensure_mid(*mid)?;
        }

        self.employees
            .require_mut(employee)?
            .set_seniority(Seniority::Junior(JuniorProfile::new(learning_period)));
        for mid in mids {
            self.supervision.link(*mid, employee);
        }
        debug!(%employee, supervisors = mids.len(), "Assigned junior level");
        Ok(())
    }

    /// Makes an unassigned employee a mid.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee is unknown or already has a level.
    pub fn assign_mid(&mut self, employee: EmployeeId) -> Result<(), CoreError> {
        self.ensure_unassigned(employee)?;
        self.employees
            .require_mut(employee)?
            .set_seniority(Seniority::Mid);
        debug!(%employee, "Assigned mid level");
        Ok(())
    }

    /// Makes an unassigned employee a senior.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee is unknown, already has a level, or
    /// the bonus coefficient is negative.
    pub fn assign_senior(
        &mut self,
        employee: EmployeeId,
        bonus_coefficient: f64,
    ) -> Result<(), CoreError> {
        self.ensure_unassigned(employee)?;
        let profile: SeniorProfile = SeniorProfile::new(bonus_coefficient)?;
        self.employees
            .require_mut(employee)?
            .set_seniority(Seniority::Senior(profile));
        debug!(%employee, "Assigned senior level");
        Ok(())
    }

    /// Promotes a junior to mid, dropping all of its supervisors.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee is unknown or not a junior.
    pub fn promote_junior_to_mid(&mut self, employee: EmployeeId) -> Result<(), CoreError> {
        self.ensure_promotion(employee, &Seniority::Mid, NOT_A_JUNIOR)?;
        let released: Vec<EmployeeId> = self.supervision.detach_right(employee);
        self.employees
            .require_mut(employee)?
            .set_seniority(Seniority::Mid);
        info!(%employee, supervisors_released = released.len(), "Promoted junior to mid");
        Ok(())
    }

    /// Promotes a mid to senior, dropping every junior it supervised.
    ///
    /// Juniors left without a supervisor keep their level; they must be
    /// given a new mid with [`SpaContext::add_junior_supervisor`].
    ///
    /// # Errors
    ///
    /// Returns an error if the employee is unknown, not a mid, or the bonus
    /// coefficient is negative.
    pub fn promote_mid_to_senior(
        &mut self,
        employee: EmployeeId,
        bonus_coefficient: f64,
    ) -> Result<(), CoreError> {
        let target: Seniority = Seniority::Senior(SeniorProfile::new(bonus_coefficient)?);
        self.ensure_promotion(employee, &target, "Employee is not a mid")?;
        let released: Vec<EmployeeId> = self.supervision.detach_left(employee);
        self.employees
            .require_mut(employee)?
            .set_seniority(target);
        info!(%employee, juniors_released = released.len(), "Promoted mid to senior");
        Ok(())
    }

    /// Adds `mid` as a supervisor of `junior`. Adding twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown, `junior` is not a junior,
    /// or `mid` is not a mid.
    pub fn add_junior_supervisor(
        &mut self,
        junior: EmployeeId,
        mid: EmployeeId,
    ) -> Result<(), CoreError> {
        self.ensure_junior(junior)?;
        self.ensure_mid(mid)?;
        if self.supervision.link(mid, junior) {
            debug!(%junior, %mid, "Added supervisor");
        }
        Ok(())
    }

    /// Removes `mid` from the supervisors of `junior`. Removing a mid that
    /// does not supervise the junior is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown or `mid` is the junior's
    /// last supervisor.
    pub fn remove_junior_supervisor(
        &mut self,
        junior: EmployeeId,
        mid: EmployeeId,
    ) -> Result<(), CoreError> {
        self.employees.ensure(junior)?;
        self.employees.ensure(mid)?;
        if !self.supervision.contains(mid, junior) {
            return Ok(());
        }
        if self.supervision.left_count(junior) == 1 {
            return Err(CoreError::illegal(SUPERVISOR_REQUIRED));
        }
        self.supervision.unlink(mid, junior);
        debug!(%junior, %mid, "Removed supervisor");
        Ok(())
    }

    /// Mids supervising `junior`.
    #[must_use]
    pub fn supervisors_of(&self, junior: EmployeeId) -> Vec<EmployeeId> {
        self.supervision.lefts_of(junior).collect()
    }

    /// Juniors supervised by `mid`.
    #[must_use]
    pub fn supervised_juniors(&self, mid: EmployeeId) -> Vec<EmployeeId> {
        self.supervision.rights_of(mid).collect()
    }

    /// # Errors
    ///
    /// Returns an error if the employee is unknown or not a junior.
    pub fn set_learning_period(
        &mut self,
        employee: EmployeeId,
        learning_period: u32,
    ) -> Result<(), CoreError> {
        let Seniority::Junior(profile) = self.employees.require_mut(employee)?.seniority_mut() else {
            return Err(CoreError::illegal(NOT_A_JUNIOR));
        };
        profile.set_learning_period(learning_period);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if the employee is unknown, not a senior, or the
    /// coefficient is negative.
    pub fn set_bonus_coefficient(
        &mut self,
        employee: EmployeeId,
        bonus_coefficient: f64,
    ) -> Result<(), CoreError> {
        let Seniority::Senior(profile) = self.employees.require_mut(employee)?.seniority_mut() else {
            return Err(CoreError::illegal("Employee is not a senior"));
        };
        profile.set_bonus_coefficient(bonus_coefficient)?;
        Ok(())
    }
}

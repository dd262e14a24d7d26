// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Branches, the rooms they own, and their staff keyed by PESEL.

use crate::entities::Employee;
use crate::error::CoreError;
use crate::ids::{BranchId, EmployeeId, RoomId};
use crate::links::KeyedLinkError;
use crate::state::SpaContext;
use spa_center_domain::{Branch, DomainError, Pesel, Room};
use tracing::{debug, info};

const PESEL_TAKEN: &str = "Employee with same PESEL already assigned to this branch";

impl SpaContext {
    /// Creates a branch together with the rooms it owns.
    ///
    /// # Errors
    ///
    /// Returns an error if `rooms` is empty. Nothing is added in that case.
    pub fn create_branch(&mut self, branch: Branch, rooms: Vec<Room>) -> Result<BranchId, CoreError> {
        if rooms.is_empty() {
            return Err(
                DomainError::MissingValue("Branch must have at least one room at creation").into(),
            );
        }
        let id: BranchId = self.branches.insert(branch)?;
        let room_count: usize = rooms.len();
        for room in rooms {
            let room_id: RoomId = self.rooms.insert(room)?;
            self.premises.link(id, room_id);
        }
        debug!(%id, rooms = room_count, "Created branch");
        Ok(id)
    }

    /// Adds a new room owned by `branch`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the branch is not live.
    pub fn add_room(&mut self, branch: BranchId, room: Room) -> Result<RoomId, CoreError> {
        self.branches.ensure(branch)?;
        let id: RoomId = self.rooms.insert(room)?;
        self.premises.link(branch, id);
        debug!(%branch, room = %id, "Added room");
        Ok(id)
    }

    /// Attaches an existing room to `branch`. Attaching a room the branch
    /// already owns is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown or the room belongs to a
    /// different branch.
    pub fn assign_room(&mut self, branch: BranchId, room: RoomId) -> Result<(), CoreError> {
        self.branches.ensure(branch)?;
        self.rooms.ensure(room)?;
        match self.premises.left_of(room) {
            Some(owner) if owner == branch => Ok(()),
            Some(_) => Err(CoreError::illegal(
                "Room already belongs to a different branch",
            )),
            None => {
                self.premises.link(branch, room);
                debug!(%branch, %room, "Assigned room");
                Ok(())
            }
        }
    }

    /// Removes a room from `branch` and from the room extent.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown, the room is not owned by
    /// this branch, or it is the branch's last room.
    pub fn remove_room(&mut self, branch: BranchId, room: RoomId) -> Result<Room, CoreError> {
        self.branches.ensure(branch)?;
        self.rooms.ensure(room)?;
        if !self.premises.contains(branch, room) {
            return Err(CoreError::illegal("Room does not belong to this branch"));
        }
        if self.premises.right_count(branch) == 1 {
            return Err(CoreError::illegal("Branch must have at least one room"));
        }
        self.premises.unlink(branch, room);
        debug!(%branch, %room, "Removed room");
        self.rooms.take(room)
    }

    /// Deletes a branch and every room it owns. Employees stay in the
    /// registry without a branch.
    ///
    /// # Errors
    ///
    /// Returns `UnknownEntity` if the branch is not live.
    pub fn delete_branch(&mut self, branch: BranchId) -> Result<Branch, CoreError> {
        self.branches.ensure(branch)?;
        let rooms: Vec<RoomId> = self.premises.detach_left(branch);
        for room in &rooms {
            self.rooms.take(*room)?;
        }
        let released: Vec<EmployeeId> = self.staff.detach_owner(branch);
        info!(
            %branch,
            rooms = rooms.len(),
            employees = released.len(),
            "Deleted branch"
        );
        self.branches.take(branch)
    }

    /// Rooms owned by `branch`.
    #[must_use]
    pub fn branch_rooms(&self, branch: BranchId) -> Vec<RoomId> {
        self.premises.rights_of(branch).collect()
    }

    /// The branch owning `room`.
    #[must_use]
    pub fn room_branch(&self, room: RoomId) -> Option<BranchId> {
        self.premises.left_of(room)
    }

    /// Adds an employee to a branch under its current PESEL. Adding an
    /// employee already in this branch is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is unknown, another employee of this
    /// branch has the same PESEL, or the employee works at another branch.
    pub fn add_employee_to_branch(
        &mut self,
        branch: BranchId,
        employee: EmployeeId,
    ) -> Result<(), CoreError> {
        self.branches.ensure(branch)?;
        let pesel: Pesel = self.employees.require(employee)?.pesel().clone();
        match self.staff.insert(branch, pesel, employee) {
            Ok(true) => {
                debug!(%branch, %employee, "Added employee to branch");
                Ok(())
            }
            Ok(false) => Ok(()),
            Err(KeyedLinkError::KeyTaken) => Err(CoreError::illegal(PESEL_TAKEN)),
            Err(KeyedLinkError::OwnedElsewhere) => Err(CoreError::illegal(
                "Employee already assigned to a different branch",
            )),
        }
    }

    /// Removes the employee with `pesel` from a branch. An unknown PESEL is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch is unknown or this is its last
    /// employee.
    pub fn remove_employee_from_branch(
        &mut self,
        branch: BranchId,
        pesel: &Pesel,
    ) -> Result<(), CoreError> {
        self.branches.ensure(branch)?;
        if self.staff.get(branch, pesel).is_none() {
            return Ok(());
        }
        if self.staff.len(branch) == 1 {
            return Err(CoreError::illegal("Branch must have at least one employee"));
        }
        if let Some(employee) = self.staff.remove(branch, pesel) {
            debug!(%branch, %employee, "Removed employee from branch");
        }
        Ok(())
    }

    /// Changes the PESEL of a branch employee, re-keying the branch map and
    /// the employee together.
    ///
    /// # Errors
    ///
    /// Returns an error if the branch is unknown, no employee has `old`, or
    /// another employee of the branch already has `new`.
    pub fn update_employee_pesel(
        &mut self,
        branch: BranchId,
        old: &Pesel,
        new: Pesel,
    ) -> Result<(), CoreError> {
        self.branches.ensure(branch)?;
        let Some(employee) = self.staff.get(branch, old) else {
            return Err(CoreError::illegal("No employee with this PESEL in the branch"));
        };
        self.staff
            .rekey(branch, old, new.clone())
            .map_err(|_| CoreError::illegal(PESEL_TAKEN))?;
        self.employees.require_mut(employee)?.set_pesel(new);
        debug!(%branch, %employee, "Updated employee PESEL");
        Ok(())
    }

    /// The employee of `branch` with `pesel`.
    #[must_use]
    pub fn branch_employee(&self, branch: BranchId, pesel: &Pesel) -> Option<EmployeeId> {
        self.staff.get(branch, pesel)
    }

    /// The branch employing `employee`.
    #[must_use]
    pub fn employee_branch(&self, employee: EmployeeId) -> Option<BranchId> {
        self.staff.owner_of(employee)
    }

    /// Employees of `branch` in PESEL order.
    #[must_use]
    pub fn branch_employees(&self, branch: BranchId) -> Vec<(EmployeeId, &Employee)> {
        self.staff
            .entries(branch)
            .filter_map(|(_, id)| self.employees.get(id).map(|employee| (id, employee)))
            .collect()
    }
}

//! Goal service
//!
//! Funding a goal moves money out of the spendable pool; deleting the goal
//! returns whatever it held.

use crate::audit::EntityType;
use crate::error::{SpendableError, SpendableResult};
use crate::models::{Goal, Money};
use crate::storage::Storage;

pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn add(&self, title: &str, target_amount: Money) -> SpendableResult<Goal> {
        let goal = Goal::new(title.trim(), target_amount);
        goal.validate()
            .map_err(|e| SpendableError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    /// Put `amount` towards a goal
    ///
    /// The amount must be positive. Funding past the target is allowed and
    /// only logged.
    pub fn fund(&self, identifier: &str, amount: Money) -> SpendableResult<Goal> {
        if !amount.is_positive() {
            return Err(SpendableError::Validation(
                "Funding amount must be greater than zero".into(),
            ));
        }

        let before = self.storage.goals.find(identifier)?;
        let mut goal = before.clone();
        goal.fund(amount);

        if goal.is_overfunded() {
            tracing::warn!(
                goal = %goal.id,
                target = %goal.target_amount,
                funded = %goal.funded_amount,
                "goal funded beyond its target"
            );
        }

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        self.storage.log_update(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &before,
            &goal,
        )?;

        Ok(goal)
    }

    /// Remove a goal, releasing its funded amount
    pub fn delete(&self, identifier: &str) -> SpendableResult<Goal> {
        let goal = self.storage.goals.find(identifier)?;
        self.storage
            .goals
            .delete(goal.id)?
            .ok_or_else(|| SpendableError::goal_not_found(identifier))?;
        self.storage.goals.save()?;

        self.storage.log_delete(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &goal,
        )?;

        Ok(goal)
    }

    pub fn list(&self) -> SpendableResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }

    pub fn find(&self, identifier: &str) -> SpendableResult<Goal> {
        self.storage.goals.find(identifier)
    }
}

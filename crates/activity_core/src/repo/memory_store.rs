//! Process-lifetime activity store backed by an ordered `Vec`.

use crate::model::activity::{Activity, ActivityId};
use crate::repo::activity_store::{ActivityStore, StoreError, StoreResult};
use log::debug;
use std::cell::RefCell;

/// In-memory `ActivityStore`. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryActivityStore {
    activities: RefCell<Vec<Activity>>,
}

impl MemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.activities.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.borrow().is_empty()
    }

    fn position(&self, id: ActivityId) -> Option<usize> {
        self.activities
            .borrow()
            .iter()
            .position(|activity| activity.id() == id)
    }
}

impl ActivityStore for MemoryActivityStore {
    fn add(&self, activity: &Activity) -> StoreResult<()> {
        let id = activity.id();
        if self.position(id).is_some() {
            return Err(StoreError::DuplicateId(id));
        }
        self.activities.borrow_mut().push(activity.clone());
        debug!(
            "event=store_add module=repo status=ok backend=memory kind={} id={}",
            id.kind.as_str(),
            id
        );
        Ok(())
    }

    fn remove(&self, id: ActivityId) -> StoreResult<()> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.activities.borrow_mut().remove(index);
        debug!(
            "event=store_remove module=repo status=ok backend=memory kind={} id={}",
            id.kind.as_str(),
            id
        );
        Ok(())
    }

    fn update(&self, activity: &Activity) -> StoreResult<()> {
        let id = activity.id();
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        self.activities.borrow_mut()[index] = activity.clone();
        Ok(())
    }

    fn list(&self) -> StoreResult<Vec<Activity>> {
        Ok(self.activities.borrow().clone())
    }

    fn find_by_id(&self, id: ActivityId) -> StoreResult<Option<Activity>> {
        Ok(self
            .activities
            .borrow()
            .iter()
            .find(|activity| activity.id() == id)
            .cloned())
    }
}

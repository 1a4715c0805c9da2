use std::collections::HashMap;
use tokio::task::JoinHandle;

/// Background work the app keeps at most one of per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskSlot {
    Popular,
    Search,
}

#[derive(Default)]
pub struct TaskManager {
    tasks: HashMap<TaskSlot, JoinHandle<()>>,
}

impl TaskManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `task` in `slot`, aborting whatever was still running there.
    pub fn spawn(&mut self, slot: TaskSlot, task: JoinHandle<()>) {
        self.tasks.retain(|_, handle| !handle.is_finished());
        if let Some(previous) = self.tasks.insert(slot, task) {
            previous.abort();
        }
    }

    pub fn abort_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        self.abort_all();
    }
}

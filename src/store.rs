//! TaskStore: load, mutate, and persist the task list.
//!
//! The store owns two partitions of the task list, `pending` and
//! `completed`, bound to a single CSV backing file. Every mutating
//! operation rewrites the whole file (header, pending rows in storage
//! order, then completed rows). There is no locking and no atomic rename;
//! exactly one process is assumed to touch the file at a time.
//!
//! Storage order vs display order: `pending` is sorted by priority once at
//! load time, and later adds append at the end. `sorted_pending()` is the
//! view the CLI numbers for display, while `mark_done`/`delete` index the
//! raw storage order. The two numberings can disagree once priorities are
//! out of order in storage; that contract is kept as-is.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;
use crate::task::{Task, TaskRow};

/// Column header of the backing file.
pub const CSV_HEADER: [&str; 3] = ["Name", "Priority", "Done"];

/// Fixed relative path of the backing file.
pub const DATA_FILE: &str = "task_database.csv";

/// File-backed task store.
#[derive(Debug, Clone)]
pub struct TaskStore {
    data_file: PathBuf,
    pending: Vec<Task>,
    completed: Vec<Task>,
}

impl TaskStore {
    /// Create a store bound to the given backing file. Call [`load`] before
    /// reading or mutating.
    ///
    /// [`load`]: TaskStore::load
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            pending: Vec::new(),
            completed: Vec::new(),
        }
    }

    /// Path to the backing file.
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Pending tasks in storage order.
    pub fn pending(&self) -> &[Task] {
        &self.pending
    }

    /// Completed tasks in storage order.
    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Pending tasks sorted ascending by priority, ties in storage order.
    pub fn sorted_pending(&self) -> Vec<&Task> {
        sorted_by_priority(&self.pending)
    }

    /// Completed tasks sorted ascending by priority, ties in storage order.
    pub fn sorted_completed(&self) -> Vec<&Task> {
        sorted_by_priority(&self.completed)
    }

    /// Populate both partitions from the backing file.
    ///
    /// A missing file is created containing only the header row and leaves
    /// the store empty. A row whose numeric column does not parse aborts
    /// the whole load with `Error::Format`; nothing is skipped.
    pub fn load(&mut self) -> Result<()> {
        self.pending.clear();
        self.completed.clear();

        if !self.data_file.exists() {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_path(&self.data_file)?;
            writer.write_record(CSV_HEADER)?;
            writer.flush()?;
            debug!(file = %self.data_file.display(), "created empty task file");
            return Ok(());
        }

        let mut reader = csv::Reader::from_path(&self.data_file)?;
        for row in reader.deserialize::<TaskRow>() {
            let task = Task::from(row?);
            if task.done {
                self.completed.push(task);
            } else {
                self.pending.push(task);
            }
        }

        // Storage order for pending starts out sorted; sort_by_key is stable.
        self.pending.sort_by_key(|task| task.priority);

        debug!(
            pending = self.pending.len(),
            completed = self.completed.len(),
            "loaded task file"
        );
        Ok(())
    }

    /// Add a pending task.
    ///
    /// An exact duplicate (same name, priority, done) already in `pending`
    /// skips both the mutation and the rewrite; the caller still reports
    /// success. Otherwise any prior task with the same name is removed from
    /// whichever partition holds it and the new task is appended to
    /// `pending`.
    pub fn add(&mut self, name: &str, priority: i64) -> Result<()> {
        let candidate = Task::new(name, priority, false);

        if self.pending.contains(&candidate) {
            debug!(name, priority, "duplicate add skipped");
            return Ok(());
        }

        remove_by_name(&mut self.pending, &candidate.name);
        remove_by_name(&mut self.completed, &candidate.name);
        self.pending.push(candidate);
        self.persist()
    }

    /// Mark the pending task at the 1-based storage-order `index` as done.
    ///
    /// Returns `Ok(false)` without mutating or persisting when the index is
    /// out of range. Any prior completed task with the same name is
    /// displaced by the newly completed one.
    pub fn mark_done(&mut self, index: i64) -> Result<bool> {
        let Some(slot) = storage_slot(index, self.pending.len()) else {
            return Ok(false);
        };

        let mut task = self.pending.remove(slot);
        task.done = true;
        remove_by_name(&mut self.completed, &task.name);
        self.completed.push(task);
        self.persist()?;
        Ok(true)
    }

    /// Delete the pending task at the 1-based storage-order `index`.
    ///
    /// Returns `Ok(false)` without mutating or persisting when the index is
    /// out of range. Completed tasks are never touched.
    pub fn delete(&mut self, index: i64) -> Result<bool> {
        let Some(slot) = storage_slot(index, self.pending.len()) else {
            return Ok(false);
        };

        self.pending.remove(slot);
        self.persist()?;
        Ok(true)
    }

    /// Delete the backing file.
    ///
    /// Returns `Ok(false)` when the file does not exist. In-memory state is
    /// left alone; the process exits right after in practice.
    pub fn clear(&self) -> Result<bool> {
        if !self.data_file.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.data_file)?;
        Ok(true)
    }

    /// Rewrite the backing file from current state: header, pending rows in
    /// storage order, then completed rows.
    fn persist(&self) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.data_file)?;

        writer.write_record(CSV_HEADER)?;
        for task in self.pending.iter().chain(self.completed.iter()) {
            writer.serialize(TaskRow::from(task))?;
        }
        writer.flush()?;

        debug!(
            pending = self.pending.len(),
            completed = self.completed.len(),
            "persisted task file"
        );
        Ok(())
    }
}

/// Convert a 1-based user index into a vec slot, rejecting out-of-range
/// values (including zero and negatives).
fn storage_slot(index: i64, len: usize) -> Option<usize> {
    if index < 1 {
        return None;
    }
    let slot = (index - 1) as usize;
    if slot < len {
        Some(slot)
    } else {
        None
    }
}

fn sorted_by_priority(tasks: &[Task]) -> Vec<&Task> {
    let mut view: Vec<&Task> = tasks.iter().collect();
    view.sort_by_key(|task| task.priority);
    view
}

fn remove_by_name(tasks: &mut Vec<Task>, name: &str) {
    if let Some(pos) = tasks.iter().position(|task| task.name == name) {
        tasks.remove(pos);
    }
}

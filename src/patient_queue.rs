use crate::error::{Error, Result};
use crate::patient::Patient;
use crate::Priority;
use core::fmt::{Display, Formatter};
use core::iter::FromIterator;
use log::{debug, trace};

/// Number of patients a queue built by `new()` can hold before it first grows.
pub const DEFAULT_CAPACITY: usize = 9;

/// A binary min-heap of patients. The most urgent patient (lowest priority,
/// then lowest name) is always at the root.
///
/// Patients are stored by value in heap order. Storage order is observable
/// through `iter()` and `Display`, and is not sorted order.
#[derive(Clone, Debug)]
pub struct PatientQueue {
    pq: Vec<Patient>,
}

fn left(parent: usize) -> usize { parent * 2 + 1 }
fn right(parent: usize) -> usize { parent * 2 + 2 }
fn parent(child: usize) -> usize { (child - 1) / 2 }

impl PatientQueue {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pq: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.pq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pq.is_empty()
    }

    /// Drops every patient. Allocated storage is kept for reuse.
    pub fn clear(&mut self) {
        debug!("clear: dropping {} patients", self.pq.len());
        self.pq.clear();
    }

    /// Iterates patients in storage (heap) order.
    pub fn iter(&self) -> impl Iterator<Item = &Patient> + '_ {
        self.pq.iter()
    }

    pub fn enqueue(&mut self, name: impl Into<String>, priority: Priority) {
        self.enqueue_patient(Patient::new(name, priority));
    }

    /// Inserts a patient into the partially-sorted heap.
    pub fn enqueue_patient(&mut self, patient: Patient) {
        trace!("enqueue {}", patient);
        let index = self.pq.len();
        self.pq.push(patient);
        self.sift_up(index);
        self.check();
    }

    /// Removes the most urgent patient and returns its name.
    pub fn dequeue(&mut self) -> Result<String> {
        self.dequeue_patient().map(|patient| patient.name)
    }

    /// Removes the most urgent patient and returns the whole record.
    pub fn dequeue_patient(&mut self) -> Result<Patient> {
        let last = self.pq.pop().ok_or(Error::EmptyQueue)?;
        let result = if self.pq.is_empty() {
            last
        } else {
            let root = core::mem::replace(&mut self.pq[0], last);
            self.sift_down(0);
            root
        };
        trace!("dequeue {}, {} left", result, self.pq.len());
        self.check();
        Ok(result)
    }

    pub fn peek(&self) -> Result<&str> {
        self.peek_patient().map(|patient| patient.name.as_str())
    }

    pub fn peek_priority(&self) -> Result<Priority> {
        self.peek_patient().map(|patient| patient.priority)
    }

    pub fn peek_patient(&self) -> Result<&Patient> {
        self.pq.first().ok_or(Error::EmptyQueue)
    }

    /// Sets the priority of the first patient in storage order whose name is
    /// exactly `name`, then restores heap order. Does nothing if there is no
    /// such patient or its priority is already `new_priority`.
    pub fn change_priority(&mut self, name: &str, new_priority: Priority) {
        let i = match self.pq.iter().position(|patient| patient.name == name) {
            Some(i) => i,
            None => {
                debug!("change_priority: no patient named {:?}", name);
                return;
            }
        };

        let old_priority = self.pq[i].priority;
        if old_priority == new_priority {
            return;
        }

        self.pq[i].priority = new_priority;
        if new_priority < old_priority {
            debug!("change_priority: {:?} {} -> {}, moving up", name, old_priority, new_priority);
            self.sift_up(i);
        } else {
            debug!("change_priority: {:?} {} -> {}, moving down", name, old_priority, new_priority);
            self.sift_down(i);
        }
        self.check();
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = parent(i);
            if !self.pq[i].is_higher_priority(&self.pq[parent]) {
                break;
            }
            self.pq.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.pq.len();
        loop {
            let mut best = i;
            let left = left(i);
            if left < len && self.pq[left].is_higher_priority(&self.pq[best]) {
                best = left;
            }
            let right = right(i);
            if right < len && self.pq[right].is_higher_priority(&self.pq[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.pq.swap(i, best);
            i = best;
        }
    }

    /// Returns the index of the first child that is more urgent than its parent.
    fn find_heap_violation(&self) -> Option<usize> {
        (1..self.pq.len()).find(|&i| self.pq[i].is_higher_priority(&self.pq[parent(i)]))
    }

    fn check(&self) {
        if cfg!(debug_assertions) {
            if let Some(i) = self.find_heap_violation() {
                panic!(
                    "heap order violated: {} at {} is above {} at {}",
                    self.pq[parent(i)],
                    parent(i),
                    self.pq[i],
                    i
                );
            }
        }
    }
}

impl Default for PatientQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Patient> for PatientQueue {
    fn extend<I: IntoIterator<Item = Patient>>(&mut self, iter: I) {
        for patient in iter {
            self.enqueue_patient(patient);
        }
    }
}

impl FromIterator<Patient> for PatientQueue {
    fn from_iter<I: IntoIterator<Item = Patient>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Renders `{Name1 (p1), Name2 (p2), ...}` in storage order.
impl Display for PatientQueue {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> core::fmt::Result {
        write!(fmt, "{{")?;
        for (i, patient) in self.pq.iter().enumerate() {
            if i != 0 {
                write!(fmt, ", ")?;
            }
            write!(fmt, "{}", patient)?;
        }
        write!(fmt, "}}")
    }
}

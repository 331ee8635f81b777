use crate::patient::Patient;
use crate::patient_queue::PatientQueue;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Dequeues until empty, returning names in the order they came out.
pub fn drain(q: &mut PatientQueue) -> Vec<String> {
    let mut names = Vec::with_capacity(q.len());
    while let Ok(name) = q.dequeue() {
        names.push(name);
    }
    assert!(q.is_empty());
    names
}

/// True if no patient in `drained` is served strictly before its predecessor.
pub fn is_drain_sorted(drained: &[Patient]) -> bool {
    drained
        .windows(2)
        .all(|w| !w[1].is_higher_priority(&w[0]))
}

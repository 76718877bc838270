use crate::model::Task;

/// Ordered collection of tasks.
///
/// Insertion order is kept until [`TaskList::sort`] is called. Positions are
/// zero-based here; user-facing numbering lives in [`crate::index`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn get(&self, position: usize) -> Option<&Task> {
        self.tasks.get(position)
    }

    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Swaps in a new value at `position`, returning the one it replaced.
    pub fn replace(&mut self, position: usize, task: Task) -> Option<Task> {
        self.tasks
            .get_mut(position)
            .map(|slot| std::mem::replace(slot, task))
    }

    pub fn remove(&mut self, position: usize) -> Option<Task> {
        (position < self.tasks.len()).then(|| self.tasks.remove(position))
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Unfinished tasks first, each group ordered by description. Ties keep their
    /// current relative order.
    pub fn sort(&mut self) {
        self.tasks.sort_by(|a, b| {
            a.is_done()
                .cmp(&b.is_done())
                .then_with(|| a.description().cmp(b.description()))
        });
    }
}

impl From<Vec<Task>> for TaskList {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl FromIterator<Task> for TaskList {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// The standard CRUD actions every controller exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Insert,
    Update,
    Delete,
}

/// REST paths of one entity controller:
///
/// ```text
/// GET    /{Name}/Get{Plural}
/// GET    /{Name}/Get{Name}/{id}
/// POST   /{Name}/Insert{Name}
/// PUT    /{Name}/Update{Name}/{id}
/// DELETE /{Name}/Delete{Name}/{id}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePaths {
    name: &'static str,
    plural: &'static str,
}

impl ResourcePaths {
    pub const fn new(name: &'static str, plural: &'static str) -> Self {
        Self { name, plural }
    }

    /// Path without the id segment.
    pub fn action_path(&self, action: Action) -> String {
        let (verb, noun) = match action {
            Action::List => ("Get", self.plural),
            Action::Get => ("Get", self.name),
            Action::Insert => ("Insert", self.name),
            Action::Update => ("Update", self.name),
            Action::Delete => ("Delete", self.name),
        };
        format!("/{}/{}{}", self.name, verb, noun)
    }

    pub fn path_with_id(&self, action: Action, id: i64) -> String {
        format!("{}/{}", self.action_path(action), id)
    }

    pub fn list(&self) -> String {
        self.action_path(Action::List)
    }

    pub fn get(&self, id: i64) -> String {
        self.path_with_id(Action::Get, id)
    }

    pub fn insert(&self) -> String {
        self.action_path(Action::Insert)
    }

    pub fn update(&self, id: i64) -> String {
        self.path_with_id(Action::Update, id)
    }

    pub fn delete(&self, id: i64) -> String {
        self.path_with_id(Action::Delete, id)
    }

    /// Extra read under the same controller ("/Trainee/GetTraineeOptions").
    pub fn custom(&self, action: &str) -> String {
        format!("/{}/{}", self.name, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_paths() {
        let paths = ResourcePaths::new("Batch", "Batches");
        assert_eq!(paths.list(), "/Batch/GetBatches");
        assert_eq!(paths.get(7), "/Batch/GetBatch/7");
        assert_eq!(paths.insert(), "/Batch/InsertBatch");
        assert_eq!(paths.update(7), "/Batch/UpdateBatch/7");
        assert_eq!(paths.delete(7), "/Batch/DeleteBatch/7");
    }

    #[test]
    fn test_custom_path() {
        let paths = ResourcePaths::new("Trainee", "Trainees");
        assert_eq!(paths.custom("GetTraineeOptions"), "/Trainee/GetTraineeOptions");
    }
}

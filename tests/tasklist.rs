#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use tarefas::db::db::Db;
    use tarefas::db::tasks::Tasks;
    use tarefas::libs::task::{Task, TaskStatus};
    use tarefas::libs::tasklist::{Confirmer, TaskError, TaskList};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Answers confirmation prompts from a script and records what was
    /// asked, so tests can assert on both sides of the dialog.
    #[derive(Clone)]
    struct ScriptedConfirmer {
        answers: Rc<RefCell<VecDeque<bool>>>,
        prompts: Rc<RefCell<Vec<String>>>,
    }

    impl ScriptedConfirmer {
        fn new(answers: &[bool]) -> Self {
            ScriptedConfirmer {
                answers: Rc::new(RefCell::new(answers.iter().copied().collect())),
                prompts: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.borrow().clone()
        }
    }

    impl Confirmer for ScriptedConfirmer {
        fn confirm(&mut self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answers.borrow_mut().pop_front().unwrap_or(false)
        }
    }

    struct ListTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ListTestContext {
        fn setup() -> Self {
            ListTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ListTestContext {
        fn list(&self, answers: &[bool]) -> (TaskList<ScriptedConfirmer>, ScriptedConfirmer) {
            let db = Db::open(self.temp_dir.path().join("tarefas.db")).unwrap();
            let store = Tasks::new(db).unwrap();
            let confirmer = ScriptedConfirmer::new(answers);
            let list = TaskList::new(store, confirmer.clone()).unwrap();
            (list, confirmer)
        }
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_add_refreshes_visible_list(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[]);

        list.add("Buy milk", "Two liters", TaskStatus::Pending).unwrap();

        assert_eq!(list.tasks().len(), 1);
        assert_eq!(list.tasks()[0].title, "Buy milk");
        assert_eq!(list.tasks()[0].status, TaskStatus::Pending);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_add_with_empty_field_fails_validation(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[]);

        let err = list.add("", "Description", TaskStatus::Pending).unwrap_err();
        assert!(matches!(err, TaskError::Validation));

        let err = list.add("Title", "", TaskStatus::Pending).unwrap_err();
        assert!(matches!(err, TaskError::Validation));

        // Nothing was inserted.
        assert!(list.tasks().is_empty());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_apply_filter_by_status(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[]);

        list.add("A", "B", TaskStatus::Pending).unwrap();
        list.add("C", "D", TaskStatus::Completed).unwrap();

        let pending = list.apply_filter(None, Some(TaskStatus::Pending)).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "A");

        // The sentinel "no filter" selection shows everything again.
        let all = list.apply_filter(None, None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_apply_filter_by_query(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[]);

        list.add("Groceries", "Milk and bread", TaskStatus::Pending).unwrap();
        list.add("Call plumber", "Kitchen sink leaks", TaskStatus::Pending).unwrap();

        let matched = list.apply_filter(Some("sink".to_string()), None).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Call plumber");
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_toggle_confirmed_flips_status(ctx: &mut ListTestContext) {
        let (mut list, confirmer) = ctx.list(&[true]);

        list.add("A", "B", TaskStatus::Pending).unwrap();
        let selection = list.tasks()[0].clone();

        let affected = list.toggle_status(&selection).unwrap();
        assert_eq!(affected, 1);
        assert_eq!(list.tasks()[0].status, TaskStatus::Completed);
        assert_eq!(confirmer.prompts().len(), 1);
        assert!(confirmer.prompts()[0].contains("Concluida"));
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_toggle_declined_changes_nothing(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[false]);

        list.add("A", "B", TaskStatus::Pending).unwrap();
        let selection = list.tasks()[0].clone();

        let err = list.toggle_status(&selection).unwrap_err();
        assert!(matches!(err, TaskError::Cancelled));
        assert_eq!(list.tasks()[0].status, TaskStatus::Pending);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_toggle_back_to_pending(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[true, true]);

        list.add("A", "B", TaskStatus::Pending).unwrap();
        list.toggle_status(&list.tasks()[0].clone()).unwrap();
        assert_eq!(list.tasks()[0].status, TaskStatus::Completed);

        list.toggle_status(&list.tasks()[0].clone()).unwrap();
        assert_eq!(list.tasks()[0].status, TaskStatus::Pending);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_remove_confirmed(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[true]);

        list.add("A", "B", TaskStatus::Pending).unwrap();
        let selection = list.tasks()[0].clone();

        let affected = list.remove(&selection).unwrap();
        assert_eq!(affected, 1);
        assert!(list.tasks().is_empty());
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_remove_declined(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[false]);

        list.add("A", "B", TaskStatus::Pending).unwrap();
        let selection = list.tasks()[0].clone();

        let err = list.remove(&selection).unwrap_err();
        assert!(matches!(err, TaskError::Cancelled));
        assert_eq!(list.tasks().len(), 1);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_remove_unmatched_selection_is_not_an_error(ctx: &mut ListTestContext) {
        let (mut list, _) = ctx.list(&[true]);

        list.add("A", "B", TaskStatus::Pending).unwrap();
        // Triple with the wrong status matches no row.
        let ghost = Task::new("A", "B", TaskStatus::Completed);

        let affected = list.remove(&ghost).unwrap();
        assert_eq!(affected, 0);
        assert_eq!(list.tasks().len(), 1);
    }

    #[test_context(ListTestContext)]
    #[test]
    fn test_ambiguous_selection_confirms_the_count(ctx: &mut ListTestContext) {
        let (mut list, confirmer) = ctx.list(&[true]);

        list.add("A", "B", TaskStatus::Pending).unwrap();
        list.add("A", "B", TaskStatus::Pending).unwrap();
        let selection = list.tasks()[0].clone();

        let affected = list.toggle_status(&selection).unwrap();
        assert_eq!(affected, 2);
        assert!(confirmer.prompts()[0].starts_with("2 tasks match"));
        assert!(list.tasks().iter().all(|t| t.status == TaskStatus::Completed));
    }
}

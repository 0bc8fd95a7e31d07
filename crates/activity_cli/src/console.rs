//! Interactive menu loop over `ActivityUseCases`.
//!
//! # Responsibility
//! - Render the menu, read line input and call the service.
//! - Re-prompt on invalid input instead of ending the session.
//!
//! # Invariants
//! - Field checks here duplicate model validation; the service result is
//!   still handled when they disagree.
//! - End of input ends the session like option 4.

use activity_core::{
    validate_description, validate_location, validate_occurs_on, Activity, ActivityUseCases,
    ServiceError, TaskFilter, ValidationError,
};
use log::warn;
use std::io::{self, BufRead, Write};

const MAIN_MENU: &str = "\
1. Create new activity
2. List all activities
3. List tasks (filter by status)
4. Exit";

/// `None` means input ended.
type Prompted<T> = io::Result<Option<T>>;

/// Line-oriented console bound to one input and one output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the menu until option 4 or end of input.
    pub fn run<U: ActivityUseCases + ?Sized>(&mut self, service: &U) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MAIN_MENU}")?;
            let Some(choice) = self.prompt("Choose an option:")? else {
                return Ok(());
            };

            let finished = match choice.trim() {
                "1" => self.create_activity(service)?.is_none(),
                "2" => {
                    self.list_activities(service)?;
                    false
                }
                "3" => self.list_tasks(service)?.is_none(),
                "4" => {
                    writeln!(self.output, "Goodbye.")?;
                    true
                }
                _ => {
                    writeln!(self.output, "Invalid option")?;
                    false
                }
            };

            if finished {
                return Ok(());
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn create_activity<U: ActivityUseCases + ?Sized>(&mut self, service: &U) -> Prompted<()> {
        loop {
            writeln!(self.output, "What kind of activity?\n1. Task\n2. Event")?;
            let Some(choice) = self.prompt("Choose an option:")? else {
                return Ok(None);
            };
            match choice.trim() {
                "1" => return self.create_task(service),
                "2" => return self.create_event(service),
                _ => writeln!(self.output, "Invalid option")?,
            }
        }
    }

    fn create_task<U: ActivityUseCases + ?Sized>(&mut self, service: &U) -> Prompted<()> {
        loop {
            let Some(description) =
                self.prompt_valid("Enter the task description:", validate_description)?
            else {
                return Ok(None);
            };

            if self.report_created(service.create_task(description))? {
                return Ok(Some(()));
            }
        }
    }

    fn create_event<U: ActivityUseCases + ?Sized>(&mut self, service: &U) -> Prompted<()> {
        loop {
            let Some(description) =
                self.prompt_valid("Enter the event description:", validate_description)?
            else {
                return Ok(None);
            };
            let Some(location) =
                self.prompt_valid("Enter the event location:", validate_location)?
            else {
                return Ok(None);
            };
            let Some(occurs_on) =
                self.prompt_valid("Enter the event date (dd/mm/yyyy):", validate_occurs_on)?
            else {
                return Ok(None);
            };

            if self.report_created(service.create_event(description, location, occurs_on))? {
                return Ok(Some(()));
            }
        }
    }

    /// Returns `false` when the input should be collected again.
    fn report_created(&mut self, result: Result<Activity, ServiceError>) -> io::Result<bool> {
        match result {
            Ok(activity) => {
                writeln!(self.output, "Activity created: {activity}")?;
                Ok(true)
            }
            Err(ServiceError::Validation(err)) => {
                writeln!(self.output, "{}", capitalize(&err.to_string()))?;
                Ok(false)
            }
            Err(err) => {
                warn!("event=console_create module=cli status=error error={err}");
                writeln!(self.output, "Could not save the activity: {err}")?;
                Ok(true)
            }
        }
    }

    fn list_activities<U: ActivityUseCases + ?Sized>(&mut self, service: &U) -> io::Result<()> {
        match service.list_activities() {
            Ok(activities) if activities.is_empty() => {
                writeln!(self.output, "No activities registered.")
            }
            Ok(activities) => {
                for activity in activities {
                    writeln!(self.output, "{}", activity.render_summary())?;
                }
                Ok(())
            }
            Err(err) => writeln!(self.output, "Could not list activities: {err}"),
        }
    }

    fn list_tasks<U: ActivityUseCases + ?Sized>(&mut self, service: &U) -> Prompted<()> {
        let filter = loop {
            writeln!(self.output, "Show tasks that are:\n1. OPEN\n2. CLOSED\n3. Both")?;
            let Some(choice) = self.prompt("Choose an option:")? else {
                return Ok(None);
            };
            match choice.trim() {
                "1" => break TaskFilter::Open,
                "2" => break TaskFilter::Closed,
                "3" => break TaskFilter::Both,
                _ => writeln!(self.output, "Invalid option")?,
            }
        };

        match service.list_tasks(filter) {
            Ok(tasks) if tasks.is_empty() => writeln!(self.output, "No tasks found.")?,
            Ok(tasks) => {
                for task in tasks {
                    writeln!(self.output, "{task}")?;
                }
            }
            Err(err) => writeln!(self.output, "Could not list tasks: {err}")?,
        }
        Ok(Some(()))
    }

    fn prompt_valid(
        &mut self,
        message: &str,
        validate: fn(&str) -> Result<(), ValidationError>,
    ) -> Prompted<String> {
        loop {
            let Some(value) = self.prompt(message)? else {
                return Ok(None);
            };
            match validate(&value) {
                Ok(()) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{}", capitalize(&err.to_string()))?,
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Prompted<String> {
        writeln!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::Console;
    use activity_core::{
        Activity, ActivityKind, ActivityService, ActivityUseCases, IdSequence,
        MemoryActivityStore, ServiceError, ServiceResult, StoreError, Task, TaskFilter,
        TaskStatus, ValidationError,
    };
    use std::cell::{Cell, RefCell};
    use std::io::Cursor;

    /// Rejects the first `rejections` task descriptions, refuses every event
    /// and cannot list activities.
    struct ScriptedService {
        ids: IdSequence,
        rejections: Cell<usize>,
        descriptions: RefCell<Vec<String>>,
        filters: RefCell<Vec<TaskFilter>>,
    }

    impl ScriptedService {
        fn rejecting(rejections: usize) -> Self {
            Self {
                ids: IdSequence::new(),
                rejections: Cell::new(rejections),
                descriptions: RefCell::new(Vec::new()),
                filters: RefCell::new(Vec::new()),
            }
        }
    }

    impl ActivityUseCases for ScriptedService {
        fn create_task(&self, description: String) -> ServiceResult<Activity> {
            self.descriptions.borrow_mut().push(description.clone());
            if self.rejections.get() > 0 {
                self.rejections.set(self.rejections.get() - 1);
                return Err(ServiceError::Validation(ValidationError::BlankDescription));
            }
            Ok(Task::create(&self.ids, description)?.into())
        }

        fn create_event(
            &self,
            _description: String,
            _location: String,
            _occurs_on: String,
        ) -> ServiceResult<Activity> {
            Err(ServiceError::IdsExhausted(ActivityKind::Event))
        }

        fn list_activities(&self) -> ServiceResult<Vec<Activity>> {
            Err(ServiceError::Store(StoreError::InvalidData(
                "disk unplugged".to_string(),
            )))
        }

        fn list_tasks(&self, filter: TaskFilter) -> ServiceResult<Vec<Task>> {
            self.filters.borrow_mut().push(filter);
            Ok(Vec::new())
        }
    }

    fn run_script<U: ActivityUseCases + ?Sized>(service: &U, script: &str) -> String {
        let mut console = Console::new(Cursor::new(script.to_string()), Vec::new());
        console.run(service).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn create_task_then_list_shows_summary() {
        let service = ActivityService::new(MemoryActivityStore::new());

        let output = run_script(&service, "1\n1\nBuy milk\n2\n4\n");

        assert!(output.contains("Activity created: Task=[id: 1"));
        assert!(output.contains("description: Buy milk, status: OPEN]"));
        assert!(output.trim_end().ends_with("Goodbye."));
        assert_eq!(service.list_activities().unwrap().len(), 1);
    }

    #[test]
    fn blank_fields_and_bad_dates_are_reprompted() {
        let service = ActivityService::new(MemoryActivityStore::new());

        let output = run_script(
            &service,
            "1\n2\n   \nLaunch\n\nHQ\n2025-03-15\n15/03/2025\n4\n",
        );

        assert!(output.contains("Description cannot be empty"));
        assert!(output.contains("Location cannot be empty"));
        assert!(output.contains("Invalid event date `2025-03-15`"));
        let activities = service.list_activities().unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].detail(), "1 - HQ - Launch");
    }

    #[test]
    fn list_tasks_by_status() {
        let service = ActivityService::new(MemoryActivityStore::new());
        service.create_task("open task").unwrap();
        let closed = service.create_task("closed task").unwrap();
        service
            .set_task_status(closed.id(), TaskStatus::Closed)
            .unwrap();

        let output = run_script(&service, "3\n2\n4\n");

        assert!(output.contains("description: closed task, status: CLOSED]"));
        assert!(!output.contains("open task"));
    }

    #[test]
    fn empty_listings_and_invalid_options_are_reported() {
        let service = ActivityService::new(MemoryActivityStore::new());

        let output = run_script(&service, "9\n2\n3\nx\n1\n4\n");

        assert!(output.contains("Invalid option"));
        assert!(output.contains("No activities registered."));
        assert!(output.contains("No tasks found."));
    }

    #[test]
    fn end_of_input_ends_session_mid_prompt() {
        let service = ActivityService::new(MemoryActivityStore::new());

        let output = run_script(&service, "1\n1\n");

        assert!(!output.contains("Goodbye."));
        assert!(service.list_activities().unwrap().is_empty());
    }

    #[test]
    fn console_runs_against_any_use_case_implementation() {
        let service = ScriptedService::rejecting(1);

        let output = run_script(
            &service,
            "1\n1\nfirst\nsecond\n1\n2\nLaunch\nHQ\n15/03/2025\n2\n3\n3\n4\n",
        );

        assert!(output.contains("Description cannot be empty"));
        assert!(output.contains("Activity created: Task=[id: 1"));
        assert!(output.contains("description: second, status: OPEN]"));
        assert!(output
            .contains("Could not save the activity: cannot create event: every id has been used"));
        assert!(output.contains("Could not list activities: invalid persisted activity data"));
        assert!(output.contains("No tasks found."));
        assert!(output.trim_end().ends_with("Goodbye."));
        assert_eq!(*service.descriptions.borrow(), ["first", "second"]);
        assert_eq!(*service.filters.borrow(), [TaskFilter::Both]);
    }
}

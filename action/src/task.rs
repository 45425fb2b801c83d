use console::style;
use std::time::Instant;

pub struct TaskRunner {
    num_tasks: u32,
    current_task: u32,
    now: Instant,
    descr: String,
    started: bool,
}

impl TaskRunner {
    pub fn new(num_tasks: u32) -> Self {
        Self {
            num_tasks,
            current_task: 0,
            now: Instant::now(),
            descr: "".into(),
            started: false,
        }
    }

    fn task_id(&self) -> String {
        style(format!("[{}/{}]", self.current_task + 1, self.num_tasks))
            .force_styling(true)
            .to_string()
    }

    pub fn start_task(&mut self, descr: impl Into<String>) {
        if self.started {
            self.end_task();
        }
        self.now = Instant::now();
        self.descr = descr.into();
        self.started = true;
        println!("{} {}", self.task_id(), &self.descr);
    }

    fn finish_task(&mut self, status: String) {
        self.started = false;
        println!("{} {} {}", self.task_id(), &self.descr, status);
        self.current_task += 1;
    }

    pub fn end_task(&mut self) {
        let time = self.now.elapsed();
        self.finish_task(format!("[{}ms]", time.as_millis()));
    }

    pub fn fail_task(&mut self) {
        let status = style("[FAILED]").red().force_styling(true).to_string();
        self.finish_task(status);
    }
}

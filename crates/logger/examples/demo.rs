//! Demonstration program: periodic user generation logging through both
//! instance and global entry points.

use firehose_logger::{Context, ContextValue, Loggable, Logger, Result, global};
use rand::Rng;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

#[derive(Clone)]
struct User {
    id: u64,
    username: String,
    logger: Arc<Logger>,
}

impl Loggable for User {
    fn format_for_log(&self) -> Value {
        json!({ "id": self.id, "username": self.username })
    }
}

impl User {
    fn new(id: u64, username: String, logger: Arc<Logger>) -> Result<Self> {
        let user = Self {
            id,
            username,
            logger,
        };
        user.log("User created")?;
        Ok(user)
    }

    fn log(&self, message: &str) -> Result<()> {
        let context = Context::new().with("user", ContextValue::loggable(self.clone()))?;
        self.logger.info(message, &context)
    }

    fn do_something(&self) -> Result<()> {
        self.log("Something happened!!!")?;
        global::warning("This message won't have any context", &Context::new())?;
        global::notice(
            "This message *should* have context",
            &Context::new().with("user", ContextValue::loggable(self.clone()))?,
        )?;
        self.log("And this one should definitely have context")
    }
}

async fn run() -> Result<()> {
    let logger = Arc::new(Logger::new());
    logger.set_context(
        Context::new()
            .with("serverID", "34y2ro3rof")?
            .with("version", "0.23.0")?,
    );

    let mut ticks = tokio::time::interval(Duration::from_secs(5));
    for _ in 0..5 {
        ticks.tick().await;
        let id: u64 = rand::thread_rng().gen_range(0..1_000_000);
        let user = User::new(id, Uuid::new_v4().to_string(), Arc::clone(&logger))?;
        user.do_something()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
    }
}

//! Smoke test for a deployment: four sync lines, then the same four through the
//! async variants on a current-thread runtime.

use crate::fields;
use crate::internal;
use crate::logger::Logger;
use crate::registry::Registry;
use std::process::ExitCode;

#[must_use]
pub fn cmd_demo(registry: &Registry, name: &str) -> ExitCode {
    let logger = match registry.logger(name) {
        Ok(logger) => logger,
        Err(e) => {
            internal::error("CLI", &format!("Cannot set up logger '{name}': {e}"));
            return ExitCode::FAILURE;
        }
    };

    println!("=== Running sync logs ===");
    sync_demo(&logger);

    println!("\n=== Running async logs ===");
    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(rt) => rt,
        Err(e) => {
            internal::error("CLI", &format!("Cannot start async runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };
    runtime.block_on(async_demo(&logger));

    if let Err(e) = logger.flush() {
        internal::error("CLI", &format!("Flush failed: {e}"));
        return ExitCode::FAILURE;
    }
    if let Some(path) = logger.file_path() {
        println!("\nWritten to {}", path.display());
    }
    ExitCode::SUCCESS
}

fn sync_demo(logger: &Logger) {
    logger.info("Test INFO log", fields! { context = "sync_test", step = 1 });
    logger.warning("Test WARNING log", fields! { context = "sync_test", step = 2 });
    logger.error("Test ERROR log", fields! { context = "sync_test", step = 3 });
    logger.critical("Test CRITICAL log", fields! { context = "sync_test", step = 4 });
}

async fn async_demo(logger: &Logger) {
    logger
        .ainfo("Test ASYNC INFO log", fields! { context = "async_test", step = 1 })
        .await;
    logger
        .awarning("Test ASYNC WARNING log", fields! { context = "async_test", step = 2 })
        .await;
    logger
        .aerror("Test ASYNC ERROR log", fields! { context = "async_test", step = 3 })
        .await;
    logger
        .acritical("Test ASYNC CRITICAL log", fields! { context = "async_test", step = 4 })
        .await;
}

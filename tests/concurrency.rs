use regex::Regex;
use sluglog::{Config, ConsoleTarget, Registry, fields};
use std::collections::HashMap;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

const THREADS: usize = 8;
const PER_THREAD: usize = 250;

fn registry(root: &std::path::Path) -> (Arc<Registry>, sluglog::output::SharedBuffer) {
    let mut config = Config::default();
    config.general.log_root = Some(root.display().to_string());
    config.console.colors = false;
    let (target, buffer) = ConsoleTarget::buffer();
    (
        Arc::new(Registry::new(&config).unwrap().with_console(target)),
        buffer,
    )
}

#[test]
fn concurrent_emitters_produce_whole_lines() {
    let tmp = TempDir::new().unwrap();
    let (registry, buffer) = registry(tmp.path());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let logger = registry.logger("conc").unwrap();
                for seq in 0..PER_THREAD {
                    logger.info(&format!("msg {seq}"), fields! { thread = t, seq = seq });
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let line_re = Regex::new(
        r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3} \| INFO\s+\| conc:concurrency\.rs:\?:\d+ - msg (\d+) \| thread=(\d+) seq=(\d+)$",
    )
    .unwrap();

    let file = fs::read_to_string(tmp.path().join("conc").join("conc.log")).unwrap();
    let console = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();

    for sink in [&file, &console] {
        assert_eq!(sink.lines().count(), THREADS * PER_THREAD);

        // Per-thread program order must survive interleaving.
        let mut next: HashMap<usize, usize> = HashMap::new();
        for line in sink.lines() {
            let caps = line_re.captures(line).unwrap_or_else(|| panic!("torn line: {line:?}"));
            let thread: usize = caps[2].parse().unwrap();
            let seq: usize = caps[3].parse().unwrap();
            assert_eq!(&caps[1], &caps[3]);
            let expected = next.entry(thread).or_insert(0);
            assert_eq!(seq, *expected, "thread {thread} out of order");
            *expected += 1;
        }
        assert_eq!(next.len(), THREADS);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_async_tasks_produce_whole_lines() {
    let tmp = TempDir::new().unwrap();
    let (registry, _buffer) = registry(tmp.path());

    let tasks: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move {
                let logger = registry.logger("tasks").unwrap();
                for seq in 0..PER_THREAD {
                    logger
                        .ainfo("tick", fields! { task = t, seq = seq })
                        .await;
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let file = fs::read_to_string(tmp.path().join("tasks").join("tasks.log")).unwrap();
    assert_eq!(file.lines().count(), THREADS * PER_THREAD);
    assert!(file.lines().all(|l| l.contains("- tick | task=")));
}

use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    path::{Path, PathBuf},
    sync::{mpsc, Arc, Mutex},
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, Context, Result};
use rusqlite::{Connection, Transaction};
use tokio::sync::oneshot;

use super::migrations::run_migrations;

const ENABLE_LOGS: bool = true;

type Job = Box<dyn FnOnce(&mut Connection) + Send + 'static>;

/// Handle to the SQLite store. One worker thread owns the connection and runs
/// jobs in submission order; clones share that worker. A job that panics is
/// reported to its caller and the worker keeps serving.
#[derive(Clone)]
pub struct Database {
    worker: Arc<Worker>,
    db_path: Arc<PathBuf>,
}

struct Worker {
    // `None` once shutdown has started; dropping the sender ends the job loop.
    jobs: Mutex<Option<mpsc::Sender<Job>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.jobs.lock().unwrap_or_else(|p| p.into_inner()).take();

        let handle = self.handle.lock().unwrap_or_else(|p| p.into_inner()).take();
        if let Some(handle) = handle {
            if handle.join().is_err() {
                crate::log_error!("Database worker exited with a panic");
            }
        }
    }
}

fn open_connection(path: &Path) -> Result<Connection> {
    let mut conn = Connection::open(path).context("failed to open SQLite database")?;

    conn.pragma_update(None, "foreign_keys", "ON")
        .context("failed to enable foreign keys")?;
    if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
        crate::log_warn!("WAL journal unavailable for {}: {err}", path.display());
    }

    run_migrations(&mut conn).context("failed to run database migrations")?;
    Ok(conn)
}

impl Database {
    pub fn new(db_path: PathBuf) -> Result<Self> {
        match db_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create database directory {}", parent.display())
                })?;
            }
            _ => {}
        }

        let (jobs_tx, jobs_rx) = mpsc::channel::<Job>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<()>>();
        let path = db_path.clone();

        let handle = thread::Builder::new()
            .name("openpts-db".into())
            .spawn(move || {
                let mut conn = match open_connection(&path) {
                    Ok(conn) => {
                        let _ = ready_tx.send(Ok(()));
                        conn
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                };

                for job in jobs_rx {
                    job(&mut conn);
                }
                crate::log_info!("Database worker for {} stopped", path.display());
            })
            .context("failed to spawn database worker thread")?;

        ready_rx
            .recv()
            .context("database worker exited before opening the store")??;

        crate::log_info!("Database ready at {}", db_path.display());

        Ok(Self {
            worker: Arc::new(Worker {
                jobs: Mutex::new(Some(jobs_tx)),
                handle: Mutex::new(Some(handle)),
            }),
            db_path: Arc::new(db_path),
        })
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    /// Run `task` against the connection on the worker thread.
    pub async fn execute<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        let job: Job = Box::new(move |conn| {
            let outcome = catch_unwind(AssertUnwindSafe(|| task(conn)))
                .unwrap_or_else(|_| Err(anyhow!("database task panicked")));
            let _ = reply_tx.send(outcome);
        });

        {
            let jobs = self.worker.jobs.lock().unwrap_or_else(|p| p.into_inner());
            jobs.as_ref()
                .ok_or_else(|| anyhow!("database is shutting down"))?
                .send(job)
                .map_err(|_| anyhow!("database worker is no longer running"))?;
        }

        reply_rx
            .await
            .map_err(|_| anyhow!("database worker dropped the request"))?
    }

    /// Run `task` inside one transaction: committed when it returns `Ok`,
    /// rolled back otherwise (including when it panics).
    pub async fn execute_tx<F, T>(&self, label: &'static str, task: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        self.execute(move |conn| {
            let tx = conn
                .transaction()
                .with_context(|| format!("failed to open {label} transaction"))?;
            let value = task(&tx)?;
            tx.commit()
                .with_context(|| format!("failed to commit {label}"))?;
            Ok(value)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch() -> (tempfile::TempDir, Database) {
        let tmp = tempfile::tempdir().unwrap();
        let db = Database::new(tmp.path().join("scratch.db")).unwrap();
        (tmp, db)
    }

    #[tokio::test]
    async fn worker_survives_panicking_task() {
        let (_tmp, db) = scratch();

        let err = db
            .execute::<_, ()>(|_| panic!("boom"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "database task panicked");

        let one: i64 = db
            .execute(|conn| Ok(conn.query_row("SELECT 1", [], |row| row.get(0))?))
            .await
            .unwrap();
        assert_eq!(one, 1);
    }

    #[tokio::test]
    async fn failed_transaction_rolls_back() {
        let (_tmp, db) = scratch();

        let result = db
            .execute_tx("test", |tx| {
                tx.execute(
                    "INSERT INTO studies (id, name, created_at) VALUES ('s1', 'x', '2024-01-01T00:00:00+00:00')",
                    [],
                )?;
                Err::<(), _>(anyhow!("abort"))
            })
            .await;
        assert!(result.is_err());

        let count: i64 = db
            .execute(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM studies", [], |row| row.get(0))?))
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}

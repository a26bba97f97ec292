use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::USERS_FILE;
use crate::models::UserRecord;

/// On-disk login store: a single pretty-printed JSON array of records.
///
/// The file is created lazily on the first successful append. A missing
/// or unparsable file always reads as an empty store. Appends take an
/// exclusive lock so two concurrent submissions cannot interleave their
/// read and write steps.
#[derive(Clone)]
pub struct UserStore {
    dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl UserStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        UserStore {
            dir: dir.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(USERS_FILE)
    }

    /// Read all recorded logins. Never fails: an absent or corrupt file
    /// yields an empty list.
    pub async fn load(&self) -> Vec<UserRecord> {
        let path = self.file_path();
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => match serde_json::from_str::<Vec<UserRecord>>(&text) {
                Ok(users) => users,
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "users store unreadable, starting with an empty list");
                    vec![]
                }
            },
            // Not created yet (or unreadable); same outcome either way.
            Err(_) => vec![],
        }
    }

    /// Append one record and rewrite the store. Returns the record count
    /// after the append.
    pub async fn append(&self, record: UserRecord) -> io::Result<usize> {
        let _guard = self.write_lock.lock().await;

        if let Err(e) = tokio::fs::create_dir_all(&self.dir).await {
            // Tolerated: the subsequent write fails if the directory is
            // genuinely unusable.
            tracing::warn!(%e, dir = %self.dir.display(), "could not create data directory");
        }

        let mut users = self.load().await;

        if users.iter().any(|u| u.email.eq_ignore_ascii_case(&record.email)) {
            tracing::info!(email = %record.email, "user with this email logged in again");
        }

        users.push(record);

        let json = serde_json::to_string_pretty(&users)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        tokio::fs::write(self.file_path(), json).await?;

        Ok(users.len())
    }
}

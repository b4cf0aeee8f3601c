use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use heed::{Database, Env, EnvOpenOptions, types::*};
use tracing::info;

use crate::domain::{collaborators::Session, user::User};

const SESSION_DB: &str = "session";
const USER_KEY: &str = "user";

/// Wallet session persisted in LMDB.
///
/// Holds the connected user between runs; signing out deletes it.
#[derive(Clone)]
pub struct SessionStore {
    env: Env,
}

impl SessionStore {
    /// Open the session for `network` under `data_dir`.
    pub fn open(data_dir: &Path, network: &str) -> Result<Self> {
        Self::with_path(data_dir.join(format!("{}.mdb", network)))
    }

    pub fn with_path(path: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&path)?;
        let env = unsafe {
            EnvOpenOptions::new()
                .map_size(10 * 1024 * 1024) // 10MB
                .max_dbs(4)
                .open(path)?
        };
        Ok(Self { env })
    }

    /// Persist the connected user.
    pub fn save_user(&self, user: &User) -> Result<()> {
        let mut wtxn = self.env.write_txn()?;
        let db: Database<Str, SerdeRmp<User>> =
            self.env.create_database(&mut wtxn, Some(SESSION_DB))?;
        db.put(&mut wtxn, USER_KEY, user)?;
        wtxn.commit()?;
        Ok(())
    }

    /// Load the user from a previous run, if still signed in.
    pub fn load_user(&self) -> Result<Option<User>> {
        let rtxn = self.env.read_txn()?;
        let db: Option<Database<Str, SerdeRmp<User>>> =
            self.env.open_database(&rtxn, Some(SESSION_DB))?;

        match db {
            Some(db) => Ok(db.get(&rtxn, USER_KEY)?),
            None => Ok(None),
        }
    }
}

impl Session for SessionStore {
    fn sign_user_out(&self) -> Result<()> {
        let mut wtxn = self.env.write_txn()?;
        let db: Database<Str, SerdeRmp<User>> =
            self.env.create_database(&mut wtxn, Some(SESSION_DB))?;
        let existed = db.delete(&mut wtxn, USER_KEY)?;
        wtxn.commit()?;
        info!("Session invalidated (stored user: {})", existed);
        Ok(())
    }
}

use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage, errors::StorageError};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub fn set_local_storage<T>(key: &str, value: T) -> ()
where
    T: Serialize,
{
    let key = format!("dogan_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// read a stored value, falling back to the default
//
// first visits have an empty store, so a key that was never written is not an error.  only real
// failures (bad json, storage disabled) reach the console
pub fn try_local_storage<T>(key: &str) -> T
where
    T: Default + for<'a> Deserialize<'a>,
{
    let prefixed = format!("dogan_{}", key);

    match LocalStorage::get(prefixed.clone()) {
        Ok(val) => val,
        Err(StorageError::KeyNotFound(_)) => {
            debug!({ key = key }, "local storage key not set, using default");
            T::default()
        }
        Err(err) => {
            console_error!(format!("Failed to fetch local storage {prefixed}: {err}"));
            T::default()
        }
    }
}

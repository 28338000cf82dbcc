use std::ffi::{CStr, CString, c_void};
use std::fmt;
use std::ptr::NonNull;

use log::{debug, warn};

use crate::engine::{Engine, RawHandle};
use crate::error::{FunctionalError, Result};

type CreateFn<E> = fn(&E, &CStr) -> RawHandle;
type ReleaseFn<E> = unsafe fn(&E, RawHandle);

/// Exclusive owner of one engine handle.
///
/// The handle is obtained from a `*New` entry point and handed back to
/// the paired `*Delete` entry point exactly once, when this value is
/// dropped.  It is neither `Clone` nor `Send`: the raw pointer inside
/// keeps it on the thread that created it.
pub struct OwnedHandle<'e, E: Engine> {
    engine: &'e E,
    raw: NonNull<c_void>,
    release: ReleaseFn<E>,
    entity: &'static str,
}

impl<'e, E: Engine> OwnedHandle<'e, E> {
    /// Marshal `name`, call `create`, and take ownership of the result.
    ///
    /// The C string lives only for the duration of the `create` call.
    pub(crate) fn acquire(
        engine: &'e E,
        entity: &'static str,
        name: &str,
        create: CreateFn<E>,
        release: ReleaseFn<E>,
    ) -> Result<Self> {
        let c_name =
            CString::new(name).map_err(|_| FunctionalError::InvalidName(name.to_string()))?;

        let raw = create(engine, &c_name);
        let Some(raw) = NonNull::new(raw) else {
            warn!("engine returned a null {entity} handle for {name:?}");
            return Err(FunctionalError::HandleCreation {
                entity,
                name: name.to_string(),
            });
        };

        debug!("created {entity} handle {raw:p} for {name:?}");
        Ok(Self {
            engine,
            raw,
            release,
            entity,
        })
    }

    pub(crate) fn engine(&self) -> &'e E {
        self.engine
    }

    /// The live handle.  Valid until `self` is dropped.
    pub(crate) fn as_raw(&self) -> RawHandle {
        self.raw.as_ptr()
    }
}

impl<E: Engine> Drop for OwnedHandle<'_, E> {
    fn drop(&mut self) {
        debug!("releasing {} handle {:p}", self.entity, self.raw);
        // SAFETY: `raw` came non-null from the paired `*New` call on
        // `engine`, and `drop` runs at most once.
        unsafe { (self.release)(self.engine, self.raw.as_ptr()) };
    }
}

impl<E: Engine> fmt::Debug for OwnedHandle<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnedHandle")
            .field("entity", &self.entity)
            .field("raw", &self.raw)
            .finish()
    }
}

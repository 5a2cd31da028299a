//! C ABI between the host and `.so` plugins.
//!
//! Every plugin exports `qs_abi_version`, `qs_config_params`, and one
//! `qs_create_*` / `qs_destroy_*` pair. Plugin objects cross the boundary as
//! `Box<Box<dyn Trait>>` so the pointer stays thin.

use crate::config::{ConfigParam, ConfigValues};

/// Bumped whenever a type crossing the boundary changes layout.
pub const QS_ABI_VERSION: u32 = 3;

/// FFI return struct from `qs_create_*` functions.
///
/// Exactly one of `plugin_ptr` / `error_ptr` is non-null.
#[repr(C)]
pub struct PluginCreateResult {
    pub plugin_ptr: *mut (),
    /// Heap-allocated UTF-8 error message, `error_len` bytes.
    pub error_ptr: *mut u8,
    pub error_len: usize,
}

impl PluginCreateResult {
    /// Take ownership of whichever side is set.
    ///
    /// `Ok` holds the raw plugin pointer, to be reboxed with the matching
    /// `qs_destroy_*`. `Err` holds the plugin's error message.
    ///
    /// # Safety
    ///
    /// `self` must come from `plugin_ok` / `plugin_err` and must not have
    /// been consumed before.
    pub unsafe fn into_result(self) -> Result<*mut (), String> {
        if !self.error_ptr.is_null() {
            let slice = std::ptr::slice_from_raw_parts_mut(self.error_ptr, self.error_len);
            let bytes = unsafe { Box::from_raw(slice) };
            return Err(String::from_utf8_lossy(&bytes).into_owned());
        }
        Ok(self.plugin_ptr)
    }
}

pub type AbiVersionFn = unsafe extern "C" fn() -> u32;

/// Returns a pointer to a boxed `Vec<ConfigParam>`. Caller takes ownership.
pub type ConfigParamsFn = unsafe extern "C" fn() -> *mut ();

/// Takes a pointer to host-owned `ConfigValues` (borrowed by the plugin).
pub type CreatePluginFn = unsafe extern "C" fn(*const ()) -> PluginCreateResult;

pub type DestroyPluginFn = unsafe extern "C" fn(*mut ());

pub fn plugin_ok<T: ?Sized>(plugin: Box<Box<T>>) -> PluginCreateResult {
    PluginCreateResult {
        plugin_ptr: Box::into_raw(plugin) as *mut (),
        error_ptr: std::ptr::null_mut(),
        error_len: 0,
    }
}

pub fn plugin_err(msg: &str) -> PluginCreateResult {
    let bytes = msg.as_bytes().to_vec().into_boxed_slice();
    let len = bytes.len();
    PluginCreateResult {
        plugin_ptr: std::ptr::null_mut(),
        error_ptr: Box::into_raw(bytes) as *mut u8,
        error_len: len,
    }
}

/// Hand config params to the host, which reboxes them as `Box<Vec<ConfigParam>>`.
pub fn config_params_ok(params: Vec<ConfigParam>) -> *mut () {
    Box::into_raw(Box::new(params)) as *mut ()
}

/// # Safety
///
/// `ptr` must come from `config_params_ok` and not have been reclaimed.
pub unsafe fn config_params_from_ptr(ptr: *mut ()) -> Vec<ConfigParam> {
    *unsafe { Box::from_raw(ptr as *mut Vec<ConfigParam>) }
}

/// # Safety
///
/// `ptr` must be null or point to a `ConfigValues` owned by the host that
/// outlives the returned reference. Null reads as empty config.
pub unsafe fn config_from_ptr<'a>(ptr: *const ()) -> Option<&'a ConfigValues> {
    unsafe { (ptr as *const ConfigValues).as_ref() }
}

#[macro_export]
macro_rules! qs_abi_version_fn {
    () => {
        #[unsafe(no_mangle)]
        pub extern "C" fn qs_abi_version() -> u32 {
            $crate::ffi::QS_ABI_VERSION
        }
    };
}

/// Export `qs_config_params` from an expression yielding `Vec<ConfigParam>`.
#[macro_export]
macro_rules! qs_config_params_fn {
    ($params:expr) => {
        #[unsafe(no_mangle)]
        pub extern "C" fn qs_config_params() -> *mut () {
            $crate::ffi::config_params_ok($params)
        }
    };
}

#[macro_export]
macro_rules! qs_destroy_fn {
    ($name:ident, $trait_ty:path) => {
        /// # Safety
        ///
        /// `ptr` must be null or come from the matching `qs_create_*`.
        #[unsafe(no_mangle)]
        pub unsafe extern "C" fn $name(ptr: *mut ()) {
            if !ptr.is_null() {
                let _ = unsafe { Box::from_raw(ptr as *mut Box<dyn $trait_ty>) };
            }
        }
    };
}

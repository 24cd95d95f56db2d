// SPDX-FileCopyrightText: 2025 Contributors to the SDL3 dynamic bindings project.
// SPDX-License-Identifier: Apache-2.0

//! Wrapper tests against a stub SDL installed as the process-wide library.
//!
//! The stub keeps its state per thread, like SDL's error buffer, so tests
//! running in parallel do not observe each other.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    ffi::{CStr, CString, c_char, c_int, c_void},
    ptr::NonNull,
    sync::{
        Once,
        atomic::{AtomicU32, Ordering},
    },
    time::Duration,
};

use sdl3::{Error, InitFlags, Version, Window, WindowFlags};
use sdl3_sys::{ConstPtr, ExportTable, Library, LoaderError, MutPtr, abi};

static SETUP: Once = Once::new();

fn setup() {
    SETUP.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .init();
        let library = Library::from_exports("stub-sdl3", Box::new(StubSdl::new()));
        sdl3_sys::install(library).unwrap();
    });
}

struct StubSdl {
    symbols: HashMap<&'static str, usize>,
}

impl StubSdl {
    fn new() -> Self {
        let symbols = HashMap::from([
            ("SDL_Init", sdl_init as usize),
            ("SDL_InitSubSystem", sdl_init as usize),
            ("SDL_QuitSubSystem", sdl_quit_sub_system as usize),
            ("SDL_WasInit", sdl_was_init as usize),
            ("SDL_Quit", sdl_quit as usize),
            ("SDL_GetError", sdl_get_error as usize),
            ("SDL_ClearError", sdl_clear_error as usize),
            ("SDL_GetVersion", sdl_get_version as usize),
            ("SDL_GetRevision", sdl_get_revision as usize),
            ("SDL_GetPlatform", sdl_get_platform as usize),
            ("SDL_GetTicks", sdl_get_ticks as usize),
            ("SDL_GetTicksNS", sdl_get_ticks_ns as usize),
            ("SDL_Delay", sdl_delay as usize),
            ("SDL_CreateWindow", sdl_create_window as usize),
            ("SDL_DestroyWindow", sdl_destroy_window as usize),
            ("SDL_GetWindowID", sdl_get_window_id as usize),
            ("SDL_GetWindowTitle", sdl_get_window_title as usize),
            ("SDL_SetWindowTitle", sdl_set_window_title as usize),
        ]);
        Self { symbols }
    }
}

impl ExportTable for StubSdl {
    fn lookup(&self, symbol: &str) -> Result<NonNull<c_void>, LoaderError> {
        self.symbols
            .get(symbol)
            .and_then(|address| NonNull::new(*address as *mut c_void))
            .ok_or_else(|| format!("undefined symbol: {symbol}").into())
    }
}

thread_local! {
    static ERROR: RefCell<CString> = RefCell::new(CString::default());
    static INITIALIZED: Cell<abi::SDL_InitFlags> = const { Cell::new(0) };
    static LAST_DELAY: Cell<Option<u32>> = const { Cell::new(None) };
    static DESTROYED: Cell<usize> = const { Cell::new(0) };
}

static NEXT_WINDOW_ID: AtomicU32 = AtomicU32::new(1);

struct StubWindow {
    id: abi::SDL_WindowID,
    title: CString,
}

fn set_error(message: &CStr) {
    ERROR.with(|error| *error.borrow_mut() = message.to_owned());
}

extern "C" fn sdl_get_error() -> *const c_char {
    // The buffer lives until the next `set_error` on this thread.
    ERROR.with(|error| error.borrow().as_ptr())
}

extern "C" fn sdl_clear_error() -> bool {
    set_error(c"");
    true
}

extern "C" fn sdl_init(flags: abi::SDL_InitFlags) -> bool {
    if flags & abi::SDL_INIT_CAMERA != 0 {
        set_error(c"No camera backend available");
        return false;
    }
    INITIALIZED.with(|initialized| initialized.set(initialized.get() | flags));
    true
}

extern "C" fn sdl_quit_sub_system(flags: abi::SDL_InitFlags) {
    INITIALIZED.with(|initialized| initialized.set(initialized.get() & !flags));
}

extern "C" fn sdl_was_init(flags: abi::SDL_InitFlags) -> abi::SDL_InitFlags {
    let initialized = INITIALIZED.with(Cell::get);
    if flags == 0 {
        initialized
    } else {
        initialized & flags
    }
}

extern "C" fn sdl_quit() {
    INITIALIZED.with(|initialized| initialized.set(0));
}

extern "C" fn sdl_get_version() -> c_int {
    abi::sdl_versionnum(3, 2, 10)
}

extern "C" fn sdl_get_revision() -> *const c_char {
    c"release-3.2.10-0-g0000000".as_ptr()
}

extern "C" fn sdl_get_platform() -> *const c_char {
    c"Stub OS".as_ptr()
}

extern "C" fn sdl_get_ticks() -> u64 {
    1_500
}

extern "C" fn sdl_get_ticks_ns() -> u64 {
    1_500_000_123
}

extern "C" fn sdl_delay(ms: u32) {
    LAST_DELAY.with(|delay| delay.set(Some(ms)));
}

extern "C" fn sdl_create_window(
    title: ConstPtr<c_char>,
    _w: c_int,
    _h: c_int,
    _flags: abi::SDL_WindowFlags,
) -> *mut abi::SDL_Window {
    if INITIALIZED.with(Cell::get) & abi::SDL_INIT_VIDEO == 0 {
        set_error(c"Video subsystem has not been initialized");
        return std::ptr::null_mut();
    }
    let window = Box::new(StubWindow {
        id: NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed),
        title: unsafe { CStr::from_ptr(title.as_ptr()) }.to_owned(),
    });
    Box::into_raw(window).cast()
}

fn stub_window<'a>(window: MutPtr<abi::SDL_Window>) -> &'a mut StubWindow {
    unsafe { window.cast::<StubWindow>().as_mut() }
}

extern "C" fn sdl_destroy_window(window: MutPtr<abi::SDL_Window>) {
    drop(unsafe { Box::from_raw(window.as_mut_ptr().cast::<StubWindow>()) });
    DESTROYED.with(|destroyed| destroyed.set(destroyed.get() + 1));
}

extern "C" fn sdl_get_window_id(window: MutPtr<abi::SDL_Window>) -> abi::SDL_WindowID {
    stub_window(window).id
}

extern "C" fn sdl_get_window_title(window: MutPtr<abi::SDL_Window>) -> *const c_char {
    stub_window(window).title.as_ptr()
}

extern "C" fn sdl_set_window_title(
    window: MutPtr<abi::SDL_Window>,
    title: ConstPtr<c_char>,
) -> bool {
    stub_window(window).title = unsafe { CStr::from_ptr(title.as_ptr()) }.to_owned();
    true
}

#[test]
fn init_and_quit_track_subsystems() {
    setup();
    sdl3::init(InitFlags::VIDEO | InitFlags::EVENTS).unwrap();
    assert!(sdl3::was_init(InitFlags::empty()).unwrap().contains(InitFlags::VIDEO));

    sdl3::init_sub_system(InitFlags::AUDIO).unwrap();
    assert_eq!(sdl3::was_init(InitFlags::AUDIO).unwrap(), InitFlags::AUDIO);
    sdl3::quit_sub_system(InitFlags::AUDIO).unwrap();
    assert!(sdl3::was_init(InitFlags::AUDIO).unwrap().is_empty());

    sdl3::quit().unwrap();
    assert!(sdl3::was_init(InitFlags::empty()).unwrap().is_empty());
}

#[test]
fn failed_init_carries_the_sdl_message() {
    setup();
    let error = sdl3::init(InitFlags::CAMERA).unwrap_err();
    assert!(matches!(error, Error::NativeCall { function: "SDL_Init", .. }));
    assert_eq!(error.native_message(), Some("No camera backend available"));
    assert_eq!(sdl3::get_error().unwrap(), "No camera backend available");

    // The stale message does not turn a later success into an error.
    sdl3::init(InitFlags::EVENTS).unwrap();

    sdl3::clear_error().unwrap();
    assert_eq!(sdl3::get_error().unwrap(), "");
}

#[test]
fn version_and_platform_queries() {
    setup();
    let version = sdl3::get_version().unwrap();
    assert_eq!(
        version,
        Version {
            major: 3,
            minor: 2,
            micro: 10
        }
    );
    assert!(sdl3::get_revision().unwrap().starts_with("release-3.2.10"));
    assert_eq!(sdl3::get_platform().unwrap(), "Stub OS");
}

#[test]
fn timer_conversions() {
    setup();
    assert_eq!(sdl3::get_ticks().unwrap(), Duration::from_millis(1_500));
    assert_eq!(sdl3::get_ticks_ns().unwrap(), Duration::from_nanos(1_500_000_123));

    sdl3::delay(Duration::from_micros(2_500)).unwrap();
    assert_eq!(LAST_DELAY.with(Cell::get), Some(2));
    sdl3::delay(Duration::from_secs(u64::MAX)).unwrap();
    assert_eq!(LAST_DELAY.with(Cell::get), Some(u32::MAX));
}

#[test]
fn window_lifecycle() {
    setup();
    sdl3::init(InitFlags::VIDEO).unwrap();
    let destroyed = DESTROYED.with(Cell::get);

    let mut window = Window::new("first", 320, 200, WindowFlags::HIDDEN).unwrap();
    assert_ne!(window.id().unwrap(), 0);
    assert_eq!(window.title().unwrap(), "first");
    window.set_title("second").unwrap();
    assert_eq!(window.title().unwrap(), "second");

    let other = Window::new("other", 320, 200, WindowFlags::empty()).unwrap();
    assert_ne!(other.id().unwrap(), window.id().unwrap());

    other.destroy().unwrap();
    assert_eq!(DESTROYED.with(Cell::get), destroyed + 1);
    drop(window);
    assert_eq!(DESTROYED.with(Cell::get), destroyed + 2);
}

#[test]
fn window_creation_failure_is_an_error_not_a_null_handle() {
    setup();
    sdl3::quit().unwrap();
    let destroyed = DESTROYED.with(Cell::get);
    let error = Window::new("nope", 320, 200, WindowFlags::empty()).unwrap_err();
    assert!(matches!(
        error,
        Error::NativeCall {
            function: "SDL_CreateWindow",
            ..
        }
    ));
    assert_eq!(
        error.native_message(),
        Some("Video subsystem has not been initialized")
    );
    assert_eq!(DESTROYED.with(Cell::get), destroyed);
}

#[test]
fn title_with_nul_is_rejected_before_the_call() {
    setup();
    sdl3::init(InitFlags::VIDEO).unwrap();
    let mut window = Window::new("ok", 10, 10, WindowFlags::empty()).unwrap();
    assert!(matches!(window.set_title("a\0b"), Err(Error::NulString(_))));
    assert_eq!(window.title().unwrap(), "ok");
    assert!(matches!(
        Window::new("a\0b", 10, 10, WindowFlags::empty()),
        Err(Error::NulString(_))
    ));
}

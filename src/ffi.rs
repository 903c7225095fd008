// C-compatible FFI bindings for Swift/iOS integration.
//
// Safety requirements:
// - All pointers must be non-null unless documented otherwise
// - All handles must be created by this module and not fabricated
// - Buffers must hold at least the number of elements stated by the caller
// - Caller must call the corresponding _destroy function for each _create
// - Strings returned by this module must be released with
//   mediatensor_string_free

use std::ffi::{CString, c_char};

use crate::error::BufferResult;
use crate::panel::{AudioPanel, ImagePanel, VideoPanel};
use crate::region::Rect;
use crate::sample_buffer::AudioClip;
use crate::selection::SelectionField;

use log::{LevelFilter, debug, error};
use oslog::OsLogger;

// Logger subsystem identifier
const LOG_SUBSYSTEM: &str = "com.mediatensor.core";

// ═══════════════════════════════════════════════════════════════════════════
// Logger Initialization
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the oslog logger.
///
/// Call once at application startup. Log lines appear in Console.app and
/// Xcode's debug console.
#[unsafe(no_mangle)]
pub extern "C" fn mediatensor_init_logger() {
    OsLogger::new(LOG_SUBSYSTEM)
        .level_filter(LevelFilter::Debug)
        .init()
        .ok();
}

// ═══════════════════════════════════════════════════════════════════════════
// Opaque Handle Types
// ═══════════════════════════════════════════════════════════════════════════

/// Opaque handle to an image panel.
pub struct MtImagePanel {
    inner: ImagePanel,
}

/// Opaque handle to a video panel.
pub struct MtVideoPanel {
    inner: VideoPanel,
}

/// Opaque handle to an audio panel.
pub struct MtAudioPanel {
    inner: AudioPanel,
}

// ═══════════════════════════════════════════════════════════════════════════
// FFI Result Types
// ═══════════════════════════════════════════════════════════════════════════

/// Selection rectangle in source pixels.
#[repr(C)]
#[derive(Default)]
pub struct MtRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl From<Rect> for MtRect {
    fn from(r: Rect) -> Self {
        Self {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Hand a Rust string to the caller. Interior NULs cannot occur in the
/// generated text; if one does, the caller gets NULL.
fn into_c_string(text: String) -> *mut c_char {
    match CString::new(text) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            error!("string with interior NUL at {}", e.nul_position());
            std::ptr::null_mut()
        }
    }
}

fn report(context: &str, result: BufferResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            error!("{}: {}", context, e);
            false
        }
    }
}

fn selection_field(field: u32) -> Option<SelectionField> {
    match field {
        0 => Some(SelectionField::X),
        1 => Some(SelectionField::Y),
        2 => Some(SelectionField::Width),
        3 => Some(SelectionField::Height),
        _ => None,
    }
}

/// Release a string returned by any `*_text` function.
///
/// # Safety
/// `text` must come from this module, or be NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn mediatensor_string_free(text: *mut c_char) {
    if !text.is_null() {
        unsafe { drop(CString::from_raw(text)) };
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Image Panel
// ═══════════════════════════════════════════════════════════════════════════

/// Create an image panel with default configuration.
///
/// Returns an opaque pointer that must be freed with `image_panel_destroy`.
#[unsafe(no_mangle)]
pub extern "C" fn image_panel_create() -> *mut MtImagePanel {
    Box::into_raw(Box::new(MtImagePanel {
        inner: ImagePanel::new(),
    }))
}

/// Destroy an image panel.
///
/// # Safety
/// `panel` must be a valid pointer returned by `image_panel_create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_destroy(panel: *mut MtImagePanel) {
    if !panel.is_null() {
        unsafe { drop(Box::from_raw(panel)) };
    }
}

/// Load decoded RGBA pixels (`width * height * 4` bytes).
///
/// # Safety
/// `rgba` must point to `len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_load(
    panel: *mut MtImagePanel,
    width: u32,
    height: u32,
    rgba: *const u8,
    len: usize,
) -> bool {
    if panel.is_null() || rgba.is_null() {
        return false;
    }
    debug!("image_panel_load: {}x{}, {} bytes", width, height, len);
    let data = unsafe { std::slice::from_raw_parts(rgba, len).to_vec() };
    report("image_panel_load", unsafe {
        (*panel).inner.load_rgba(width, height, data)
    })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_pointer_down(panel: *mut MtImagePanel, x: f64, y: f64) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.pointer_down(x, y) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_pointer_move(panel: *mut MtImagePanel, x: f64, y: f64) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.pointer_move(x, y) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_pointer_up(panel: *mut MtImagePanel) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.pointer_up() };
}

/// Numeric control edit. Field: 0 = X, 1 = Y, 2 = Width, 3 = Height.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_set_field(panel: *mut MtImagePanel, field: u32, value: i64) {
    if panel.is_null() {
        return;
    }
    if let Some(f) = selection_field(field) {
        unsafe { (*panel).inner.set_field(f, value) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_selection(panel: *const MtImagePanel) -> MtRect {
    if panel.is_null() {
        return MtRect::default();
    }
    unsafe { (*panel).inner.selection().into() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_toggle_data(panel: *mut MtImagePanel) -> bool {
    if panel.is_null() {
        return false;
    }
    unsafe { (*panel).inner.toggle_data() }
}

/// Numeric area text. Free with `mediatensor_string_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn image_panel_data_text(panel: *const MtImagePanel) -> *mut c_char {
    if panel.is_null() {
        return std::ptr::null_mut();
    }
    into_c_string(unsafe { (*panel).inner.data_text() })
}

// ═══════════════════════════════════════════════════════════════════════════
// Video Panel
// ═══════════════════════════════════════════════════════════════════════════

/// Create a video panel. Free with `video_panel_destroy`.
#[unsafe(no_mangle)]
pub extern "C" fn video_panel_create() -> *mut MtVideoPanel {
    Box::into_raw(Box::new(MtVideoPanel {
        inner: VideoPanel::new(),
    }))
}

/// Destroy a video panel.
///
/// # Safety
/// `panel` must be a valid pointer returned by `video_panel_create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_destroy(panel: *mut MtVideoPanel) {
    if !panel.is_null() {
        unsafe { drop(Box::from_raw(panel)) };
    }
}

/// A new file was picked; metadata follows once the player knows it.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_load_source(panel: *mut MtVideoPanel) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.load_source() };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_load_metadata(
    panel: *mut MtVideoPanel,
    width: u32,
    height: u32,
    duration: f64,
) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.load_metadata(width, height, duration) };
}

/// Snapshot the current frame. Call after pausing or seeking.
///
/// # Safety
/// `rgba` must point to `len` readable bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_capture_frame(
    panel: *mut MtVideoPanel,
    width: u32,
    height: u32,
    rgba: *const u8,
    len: usize,
) -> bool {
    if panel.is_null() || rgba.is_null() {
        return false;
    }
    let data = unsafe { std::slice::from_raw_parts(rgba, len).to_vec() };
    report("video_panel_capture_frame", unsafe {
        (*panel).inner.capture_rgba(width, height, data)
    })
}

/// Playback state changed on the player side.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_set_playing(panel: *mut MtVideoPanel, playing: bool) {
    if panel.is_null() {
        return;
    }
    let panel = unsafe { &mut (*panel).inner };
    if playing {
        panel.on_play();
    } else {
        panel.on_pause();
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_time_update(panel: *mut MtVideoPanel, seconds: f64) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.on_time_update(seconds) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_pointer_down(panel: *mut MtVideoPanel, x: f64, y: f64) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.pointer_down(x, y) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_pointer_move(panel: *mut MtVideoPanel, x: f64, y: f64) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.pointer_move(x, y) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_pointer_up(panel: *mut MtVideoPanel) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.pointer_up() };
}

/// Numeric control edit. Field: 0 = X, 1 = Y, 2 = Width, 3 = Height.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_set_field(panel: *mut MtVideoPanel, field: u32, value: i64) {
    if panel.is_null() {
        return;
    }
    if let Some(f) = selection_field(field) {
        unsafe { (*panel).inner.set_field(f, value) };
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_selection(panel: *const MtVideoPanel) -> MtRect {
    if panel.is_null() {
        return MtRect::default();
    }
    unsafe { (*panel).inner.selection().into() }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_toggle_data(panel: *mut MtVideoPanel) -> bool {
    if panel.is_null() {
        return false;
    }
    unsafe { (*panel).inner.toggle_data() }
}

/// Numeric area text. Free with `mediatensor_string_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn video_panel_data_text(panel: *const MtVideoPanel) -> *mut c_char {
    if panel.is_null() {
        return std::ptr::null_mut();
    }
    into_c_string(unsafe { (*panel).inner.data_text() })
}

// ═══════════════════════════════════════════════════════════════════════════
// Audio Panel
// ═══════════════════════════════════════════════════════════════════════════

/// Create an audio panel. Free with `audio_panel_destroy`.
#[unsafe(no_mangle)]
pub extern "C" fn audio_panel_create() -> *mut MtAudioPanel {
    Box::into_raw(Box::new(MtAudioPanel {
        inner: AudioPanel::new(),
    }))
}

/// Destroy an audio panel.
///
/// # Safety
/// `panel` must be a valid pointer returned by `audio_panel_create`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_destroy(panel: *mut MtAudioPanel) {
    if !panel.is_null() {
        unsafe { drop(Box::from_raw(panel)) };
    }
}

/// Load planar channel data: `channels` runs of equal length.
///
/// # Safety
/// `samples` must point to `len` readable floats.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_load(
    panel: *mut MtAudioPanel,
    samples: *const f32,
    len: usize,
    channels: u32,
    sample_rate: f64,
) -> bool {
    if panel.is_null() || samples.is_null() {
        return false;
    }
    debug!(
        "audio_panel_load: {} samples, {} channel(s) @ {} Hz",
        len, channels, sample_rate
    );
    let data = unsafe { std::slice::from_raw_parts(samples, len) };
    let result = AudioClip::from_planar(data, channels as usize, sample_rate)
        .map(|clip| unsafe { (*panel).inner.load(clip) });
    report("audio_panel_load", result)
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_set_start(panel: *mut MtAudioPanel, seconds: f64) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.set_start(seconds) };
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_set_end(panel: *mut MtAudioPanel, seconds: f64) {
    if panel.is_null() {
        return;
    }
    unsafe { (*panel).inner.set_end(seconds) };
}

/// Write the time window to `out_start` / `out_end`.
///
/// # Safety
/// Output pointers must be valid for writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_time_selection(
    panel: *const MtAudioPanel,
    out_start: *mut f64,
    out_end: *mut f64,
) {
    if panel.is_null() || out_start.is_null() || out_end.is_null() {
        return;
    }
    unsafe {
        let t = (*panel).inner.time_selection();
        *out_start = t.start();
        *out_end = t.end();
    }
}

/// Copy up to `capacity` selected samples into `out`. Returns the number
/// of samples in the selection (may exceed `capacity`).
///
/// # Safety
/// `out` must be valid for `capacity` writes, or NULL with capacity 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_selected_samples(
    panel: *const MtAudioPanel,
    out: *mut f32,
    capacity: usize,
) -> usize {
    if panel.is_null() {
        return 0;
    }
    let samples = unsafe { (*panel).inner.selected_samples() }.unwrap_or_default();
    if !out.is_null() {
        let n = samples.len().min(capacity);
        let dst = unsafe { std::slice::from_raw_parts_mut(out, n) };
        dst.copy_from_slice(&samples[..n]);
    }
    samples.len()
}

/// SVG path data for the sample chart. Free with `mediatensor_string_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_chart_path(panel: *const MtAudioPanel) -> *mut c_char {
    if panel.is_null() {
        return std::ptr::null_mut();
    }
    into_c_string(unsafe { (*panel).inner.chart().path_data() })
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_set_playing(panel: *mut MtAudioPanel, playing: bool) {
    if panel.is_null() {
        return;
    }
    let panel = unsafe { &mut (*panel).inner };
    if playing {
        panel.on_play();
    } else {
        panel.on_pause();
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_toggle_data(panel: *mut MtAudioPanel) -> bool {
    if panel.is_null() {
        return false;
    }
    unsafe { (*panel).inner.toggle_data() }
}

/// Numeric area text. Free with `mediatensor_string_free`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn audio_panel_data_text(panel: *const MtAudioPanel) -> *mut c_char {
    if panel.is_null() {
        return std::ptr::null_mut();
    }
    into_c_string(unsafe { (*panel).inner.data_text() })
}

//! Raw bindings to the Accessibility API in `ApplicationServices`.
//!
//! `core-foundation` and `core-graphics` cover everything else; the AX
//! functions have no maintained wrapper crate.

#![allow(non_upper_case_globals)]

use std::ffi::c_void;

use core_foundation::base::{CFTypeID, CFTypeRef};
use core_foundation::dictionary::CFDictionaryRef;
use core_foundation::string::CFStringRef;

pub type AXUIElementRef = *mut c_void;
pub type AXValueRef = *mut c_void;
pub type AXError = i32;

pub const AX_ERROR_SUCCESS: AXError = 0;

pub const AX_VALUE_TYPE_CG_POINT: u32 = 1;
pub const AX_VALUE_TYPE_CG_SIZE: u32 = 2;

#[link(name = "ApplicationServices", kind = "framework")]
unsafe extern "C" {
    pub fn AXUIElementCreateSystemWide() -> AXUIElementRef;

    pub fn AXUIElementCopyElementAtPosition(
        application: AXUIElementRef,
        x: f32,
        y: f32,
        element: *mut AXUIElementRef,
    ) -> AXError;

    pub fn AXUIElementCopyAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: *mut CFTypeRef,
    ) -> AXError;

    pub fn AXUIElementSetAttributeValue(
        element: AXUIElementRef,
        attribute: CFStringRef,
        value: CFTypeRef,
    ) -> AXError;

    pub fn AXUIElementGetPid(element: AXUIElementRef, pid: *mut i32) -> AXError;

    pub fn AXUIElementGetTypeID() -> CFTypeID;

    pub fn AXValueCreate(value_type: u32, value: *const c_void) -> AXValueRef;

    pub fn AXValueGetTypeID() -> CFTypeID;

    pub fn AXValueGetValue(value: AXValueRef, value_type: u32, value_ptr: *mut c_void) -> bool;

    pub fn AXIsProcessTrustedWithOptions(options: CFDictionaryRef) -> bool;

    pub static kAXTrustedCheckOptionPrompt: CFStringRef;
}

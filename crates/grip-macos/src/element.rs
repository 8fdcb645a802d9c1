use std::ffi::c_void;

use core_foundation::base::{CFType, CFTypeRef, TCFType};
use core_foundation::boolean::CFBoolean;
use core_foundation::string::CFString;
use core_graphics::geometry::{CGPoint, CGSize};
use grip_core::{Element, Point, Size};

use crate::ffi::{
    AX_ERROR_SUCCESS, AX_VALUE_TYPE_CG_POINT, AX_VALUE_TYPE_CG_SIZE, AXUIElementCopyAttributeValue,
    AXUIElementCopyElementAtPosition, AXUIElementCreateSystemWide, AXUIElementGetPid,
    AXUIElementGetTypeID, AXUIElementRef, AXUIElementSetAttributeValue, AXValueCreate,
    AXValueGetTypeID, AXValueGetValue, AXValueRef,
};

const POSITION: &str = "AXPosition";
const SIZE: &str = "AXSize";
const PARENT: &str = "AXParent";
const ROLE: &str = "AXRole";
const MAIN: &str = "AXMain";

/// An `AXUIElementRef` with its own retain.
///
/// Cloning retains, dropping releases. Every accessor fails soft: an
/// element whose application has quit just returns `None`.
#[derive(Clone)]
pub struct AxElement(CFType);

impl AxElement {
    /// The system-wide element used for hit-testing.
    pub fn system_wide() -> Option<Self> {
        // SAFETY: returns a +1 reference or null.
        unsafe { Self::from_create_rule(AXUIElementCreateSystemWide() as CFTypeRef) }
    }

    /// Returns the deepest element at the screen point, as reported by
    /// the application under it.
    pub fn element_at(&self, point: Point) -> Option<Self> {
        let mut out: AXUIElementRef = std::ptr::null_mut();
        // SAFETY: `self` holds a live AX element and `out` is a valid
        // out-pointer. On success `out` is +1.
        let err = unsafe {
            AXUIElementCopyElementAtPosition(self.raw(), point.x as f32, point.y as f32, &mut out)
        };
        if err != AX_ERROR_SUCCESS {
            return None;
        }
        unsafe { Self::from_create_rule(out as CFTypeRef) }
    }

    /// Window title, for diagnostics.
    pub fn title(&self) -> Option<String> {
        self.string_attribute("AXTitle")
    }

    /// Whether this is the main window of its application.
    pub fn is_main(&self) -> bool {
        self.copy_attribute(MAIN)
            .and_then(|v| v.downcast::<CFBoolean>())
            .is_some_and(bool::from)
    }

    unsafe fn from_create_rule(raw: CFTypeRef) -> Option<Self> {
        if raw.is_null() {
            return None;
        }
        Some(Self(unsafe { CFType::wrap_under_create_rule(raw) }))
    }

    fn raw(&self) -> AXUIElementRef {
        self.0.as_CFTypeRef() as AXUIElementRef
    }

    fn copy_attribute(&self, name: &str) -> Option<CFType> {
        let attribute = CFString::new(name);
        let mut value: CFTypeRef = std::ptr::null();
        // SAFETY: valid element, attribute string, and out-pointer. The
        // copied value is +1 and wrapped under the create rule.
        let err = unsafe {
            AXUIElementCopyAttributeValue(self.raw(), attribute.as_concrete_TypeRef(), &mut value)
        };
        if err != AX_ERROR_SUCCESS || value.is_null() {
            return None;
        }
        Some(unsafe { CFType::wrap_under_create_rule(value) })
    }

    fn set_attribute(&self, name: &str, value: &CFType) {
        let attribute = CFString::new(name);
        // SAFETY: valid element, attribute string, and value. The callee
        // does not take ownership.
        let err = unsafe {
            AXUIElementSetAttributeValue(
                self.raw(),
                attribute.as_concrete_TypeRef(),
                value.as_CFTypeRef(),
            )
        };
        if err != AX_ERROR_SUCCESS {
            grip_core::log_debug!("Setting {name} failed (AXError {err})");
        }
    }

    fn string_attribute(&self, name: &str) -> Option<String> {
        self.copy_attribute(name)?
            .downcast::<CFString>()
            .map(|s| s.to_string())
    }

    /// Reads an `AXValue` attribute holding a `T` of the given AX type.
    fn value_attribute<T>(&self, name: &str, value_type: u32, mut out: T) -> Option<T> {
        let value = self.copy_attribute(name)?;
        // SAFETY: the type-ID check guarantees `value` is an AXValue, and
        // `out` has the layout of the requested AX value type.
        let ok = unsafe {
            value.type_of() == AXValueGetTypeID()
                && AXValueGetValue(
                    value.as_CFTypeRef() as AXValueRef,
                    value_type,
                    &mut out as *mut T as *mut c_void,
                )
        };
        ok.then_some(out)
    }

    fn set_value_attribute<T>(&self, name: &str, value_type: u32, value: &T) {
        // SAFETY: `value` has the layout of the requested AX value type.
        let raw = unsafe { AXValueCreate(value_type, value as *const T as *const c_void) };
        if let Some(wrapped) = unsafe { Self::from_create_rule(raw as CFTypeRef) } {
            self.set_attribute(name, &wrapped.0);
        }
    }
}

impl Element for AxElement {
    fn position(&self) -> Option<Point> {
        self.value_attribute(POSITION, AX_VALUE_TYPE_CG_POINT, CGPoint::new(0.0, 0.0))
            .map(|p| Point::new(p.x, p.y))
    }

    fn set_position(&self, position: Point) {
        let point = CGPoint::new(position.x, position.y);
        self.set_value_attribute(POSITION, AX_VALUE_TYPE_CG_POINT, &point);
    }

    fn size(&self) -> Option<Size> {
        self.value_attribute(SIZE, AX_VALUE_TYPE_CG_SIZE, CGSize::new(0.0, 0.0))
            .map(|s| Size::new(s.width, s.height))
    }

    fn set_size(&self, size: Size) {
        let size = CGSize::new(size.width, size.height);
        self.set_value_attribute(SIZE, AX_VALUE_TYPE_CG_SIZE, &size);
    }

    fn role(&self) -> Option<String> {
        self.string_attribute(ROLE)
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.copy_attribute(PARENT)?;
        // SAFETY: plain type-ID query.
        (parent.type_of() == unsafe { AXUIElementGetTypeID() }).then_some(Self(parent))
    }

    fn pid(&self) -> Option<i32> {
        let mut pid = 0;
        // SAFETY: valid element and out-pointer.
        let err = unsafe { AXUIElementGetPid(self.raw(), &mut pid) };
        (err == AX_ERROR_SUCCESS).then_some(pid)
    }

    fn bring_to_front(&self) {
        if self.is_main() {
            return;
        }
        self.set_attribute(MAIN, &CFBoolean::true_value().as_CFType());
    }
}

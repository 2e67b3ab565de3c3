//! OpenCL FFI backend
//!
//! Raw bindings to the four entry points of the capability-query interface
//! and a [`CapabilityQuery`] implementation on top of them. Only compiled
//! with the `opencl` feature, which links `libOpenCL`.

use libc::c_void;
use std::ptr;

use crate::backend::{CapabilityQuery, Status};
use crate::catalog::CL_DEVICE_TYPE_ALL;

const CL_SUCCESS: Status = 0;

#[link(name = "OpenCL")]
extern "C" {
    fn clGetPlatformIDs(
        num_entries: u32,
        platforms: *mut *mut c_void,
        num_platforms: *mut u32,
    ) -> Status;

    fn clGetDeviceIDs(
        platform: *mut c_void,
        device_type: u64,
        num_entries: u32,
        devices: *mut *mut c_void,
        num_devices: *mut u32,
    ) -> Status;

    fn clGetPlatformInfo(
        platform: *mut c_void,
        param_name: u32,
        param_value_size: usize,
        param_value: *mut c_void,
        param_value_size_ret: *mut usize,
    ) -> Status;

    fn clGetDeviceInfo(
        device: *mut c_void,
        param_name: u32,
        param_value_size: usize,
        param_value: *mut c_void,
        param_value_size_ret: *mut usize,
    ) -> Status;
}

fn check<T>(status: Status, value: T) -> Result<T, Status> {
    if status == CL_SUCCESS {
        Ok(value)
    } else {
        Err(status)
    }
}

/// Opaque platform handle returned by the interface
#[derive(Debug, Clone, Copy)]
pub struct PlatformHandle(*mut c_void);

/// Opaque device handle returned by the interface
#[derive(Debug, Clone, Copy)]
pub struct DeviceHandle(*mut c_void);

/// Capability-query backend speaking to the installed OpenCL implementation
#[derive(Debug, Default)]
pub struct OpenClBackend;

impl OpenClBackend {
    /// Create a backend over the system OpenCL library
    pub fn new() -> Self {
        Self
    }
}

impl CapabilityQuery for OpenClBackend {
    type Platform = PlatformHandle;
    type Device = DeviceHandle;

    fn platform_count(&self) -> Result<u32, Status> {
        let mut count = 0u32;
        let status = unsafe { clGetPlatformIDs(0, ptr::null_mut(), &mut count) };
        check(status, count)
    }

    fn platforms(&self, count: u32) -> Result<Vec<PlatformHandle>, Status> {
        let mut ids = vec![ptr::null_mut(); count as usize];
        let status = unsafe { clGetPlatformIDs(count, ids.as_mut_ptr(), ptr::null_mut()) };
        check(status, ids.into_iter().map(PlatformHandle).collect())
    }

    fn device_count(&self, platform: PlatformHandle) -> Result<u32, Status> {
        let mut count = 0u32;
        let status = unsafe {
            clGetDeviceIDs(platform.0, CL_DEVICE_TYPE_ALL, 0, ptr::null_mut(), &mut count)
        };
        check(status, count)
    }

    fn devices(&self, platform: PlatformHandle, count: u32) -> Result<Vec<DeviceHandle>, Status> {
        let mut ids = vec![ptr::null_mut(); count as usize];
        let status = unsafe {
            clGetDeviceIDs(platform.0, CL_DEVICE_TYPE_ALL, count, ids.as_mut_ptr(), ptr::null_mut())
        };
        check(status, ids.into_iter().map(DeviceHandle).collect())
    }

    fn platform_value_size(&self, platform: PlatformHandle, id: u32) -> Result<usize, Status> {
        let mut size = 0usize;
        let status = unsafe { clGetPlatformInfo(platform.0, id, 0, ptr::null_mut(), &mut size) };
        check(status, size)
    }

    fn platform_value(
        &self,
        platform: PlatformHandle,
        id: u32,
        dest: &mut [u8],
    ) -> Result<(), Status> {
        let status = unsafe {
            clGetPlatformInfo(
                platform.0,
                id,
                dest.len(),
                dest.as_mut_ptr() as *mut c_void,
                ptr::null_mut(),
            )
        };
        check(status, ())
    }

    fn device_value_size(&self, device: DeviceHandle, id: u32) -> Result<usize, Status> {
        let mut size = 0usize;
        let status = unsafe { clGetDeviceInfo(device.0, id, 0, ptr::null_mut(), &mut size) };
        check(status, size)
    }

    fn device_value(&self, device: DeviceHandle, id: u32, dest: &mut [u8]) -> Result<(), Status> {
        let status = unsafe {
            clGetDeviceInfo(
                device.0,
                id,
                dest.len(),
                dest.as_mut_ptr() as *mut c_void,
                ptr::null_mut(),
            )
        };
        check(status, ())
    }
}

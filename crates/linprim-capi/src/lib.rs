//! C API for linprim
//!
//! This crate provides a C-compatible interface to the linprim library so
//! that C and C++ calculation code can create vectors, matrices and
//! permutations, or wrap buffers it already owns.
//!
//! All extern "C" functions are inherently unsafe as they work with raw pointers
//! from foreign code. The `#[unsafe(no_mangle)]` attribute marks the entire
//! function signature as unsafe at the FFI boundary.
//!
//! Sizes and indices are signed (`long`). Negative sizes are rejected with
//! `LP_INVALID_ARGUMENT`; negative indices with `LP_INDEX_OUT_OF_RANGE`.
//!
//! Binary operations accept the destination handle as an operand
//! (`lp_vector_sum(y, y, w)` computes `y += w`). Two distinct handles that
//! wrap overlapping caller buffers must not be combined in one call: each
//! holds an exclusive borrow, so doing so is undefined behaviour.

#![allow(non_camel_case_types)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use libc::{c_double, c_int, c_long};
use linprim::{LinalgError, Matrix, Permutation, Vector};
use std::borrow::Cow;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr;

// Status codes
pub type StatusCode = c_int;

pub const LP_SUCCESS: StatusCode = 0;
pub const LP_INVALID_ARGUMENT: StatusCode = -1;
pub const LP_DIMENSION_MISMATCH: StatusCode = -2;
pub const LP_INDEX_OUT_OF_RANGE: StatusCode = -3;
pub const LP_INTERNAL_ERROR: StatusCode = -4;

/// Opaque permutation handle.
pub struct lp_permutation {
    inner: Permutation,
}

/// Opaque vector handle.
///
/// Wrapped vectors reference caller storage that must outlive the handle.
pub struct lp_vector {
    inner: Vector<'static>,
}

/// Opaque matrix handle (row-major).
pub struct lp_matrix {
    inner: Matrix<'static>,
}

fn status_of(err: &LinalgError) -> StatusCode {
    match err {
        LinalgError::DimensionMismatch { .. } => LP_DIMENSION_MISMATCH,
        LinalgError::IndexOutOfRange { .. } => LP_INDEX_OUT_OF_RANGE,
        LinalgError::InvalidArgument { .. } => LP_INVALID_ARGUMENT,
    }
}

fn to_status(result: Result<(), LinalgError>) -> StatusCode {
    match result {
        Ok(()) => LP_SUCCESS,
        Err(err) => status_of(&err),
    }
}

/// Run `f`, turning a panic into `LP_INTERNAL_ERROR`.
fn guarded<F>(f: F) -> StatusCode
where
    F: FnOnce() -> StatusCode,
{
    catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        log::error!("panic caught at the C boundary");
        LP_INTERNAL_ERROR
    })
}

/// Run a constructor, report its status and box the result.
fn construct<T, F>(status: *mut StatusCode, f: F) -> *mut T
where
    F: FnOnce() -> Result<T, StatusCode>,
{
    if status.is_null() {
        return ptr::null_mut();
    }

    let result = catch_unwind(AssertUnwindSafe(f));

    let (handle, code) = match result {
        Ok(Ok(value)) => (Box::into_raw(Box::new(value)), LP_SUCCESS),
        Ok(Err(code)) => (ptr::null_mut(), code),
        Err(_) => {
            log::error!("panic caught at the C boundary");
            (ptr::null_mut(), LP_INTERNAL_ERROR)
        }
    };
    unsafe {
        *status = code;
    }
    handle
}

/// Box the result of `f`, or return null if it panics.
fn duplicate<T, F>(f: F) -> *mut T
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Box::into_raw(Box::new(value)),
        Err(_) => {
            log::error!("panic caught at the C boundary");
            ptr::null_mut()
        }
    }
}

fn size_arg(n: c_long) -> Result<usize, StatusCode> {
    usize::try_from(n).map_err(|_| LP_INVALID_ARGUMENT)
}

/// Reject element counts no `f64` buffer can hold.
fn buffer_len(len: usize) -> Result<usize, StatusCode> {
    if len <= isize::MAX as usize / std::mem::size_of::<c_double>() {
        Ok(len)
    } else {
        Err(LP_INVALID_ARGUMENT)
    }
}

fn index_arg(n: c_long) -> Result<usize, StatusCode> {
    usize::try_from(n).map_err(|_| LP_INDEX_OUT_OF_RANGE)
}

fn release<T>(handle: *mut T) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// Borrow `src`, or copy it when it is the same handle as `dest`.
///
/// Must be called before a mutable reference to `dest` is formed.
unsafe fn operand<'a>(
    dest: *const lp_vector,
    src: *const lp_vector,
) -> Cow<'a, Vector<'static>> {
    if ptr::eq(dest, src) {
        Cow::Owned(unsafe { (*src).inner.clone() })
    } else {
        Cow::Borrowed(unsafe { &(*src).inner })
    }
}

unsafe fn matrix_operand<'a>(
    dest: *const lp_matrix,
    src: *const lp_matrix,
) -> Cow<'a, Matrix<'static>> {
    if ptr::eq(dest, src) {
        Cow::Owned(unsafe { (*src).inner.clone() })
    } else {
        Cow::Borrowed(unsafe { &(*src).inner })
    }
}

// ============================================================================
// Permutation
// ============================================================================

/// Create the identity permutation on `0..dim`.
///
/// # Returns
/// Pointer to new permutation, or null on error (`dim <= 0` gives
/// `LP_INVALID_ARGUMENT`)
#[unsafe(no_mangle)]
pub extern "C" fn lp_permutation_new(dim: c_long, status: *mut StatusCode) -> *mut lp_permutation {
    construct(status, || {
        let dim = size_arg(dim)?;
        let inner = Permutation::new(dim).map_err(|e| status_of(&e))?;
        Ok(lp_permutation { inner })
    })
}

/// Deep-copy a permutation.
#[unsafe(no_mangle)]
pub extern "C" fn lp_permutation_clone(src: *const lp_permutation) -> *mut lp_permutation {
    if src.is_null() {
        return ptr::null_mut();
    }
    duplicate(|| lp_permutation {
        inner: unsafe { (*src).inner.clone() },
    })
}

/// Release (free) a permutation.
#[unsafe(no_mangle)]
pub extern "C" fn lp_permutation_release(p: *mut lp_permutation) {
    release(p);
}

/// Number of permuted indices, or 0 for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn lp_permutation_dim(p: *const lp_permutation) -> c_long {
    if p.is_null() {
        return 0;
    }
    unsafe { (*p).inner.dim() as c_long }
}

/// Write the image of `n` to `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_permutation_get(
    p: *const lp_permutation,
    n: c_long,
    out: *mut c_long,
) -> StatusCode {
    if p.is_null() || out.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let n = match index_arg(n) {
            Ok(n) => n,
            Err(code) => return code,
        };
        match unsafe { (*p).inner.get(n) } {
            Ok(image) => {
                unsafe {
                    *out = image as c_long;
                }
                LP_SUCCESS
            }
            Err(err) => status_of(&err),
        }
    })
}

/// Swap the images of `i` and `j`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_permutation_add_cycle(
    p: *mut lp_permutation,
    i: c_long,
    j: c_long,
) -> StatusCode {
    if p.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let (i, j) = match (index_arg(i), index_arg(j)) {
            (Ok(i), Ok(j)) => (i, j),
            _ => return LP_INDEX_OUT_OF_RANGE,
        };
        let p = unsafe { &mut (*p).inner };
        to_status(p.add_cycle(i, j).map(|_| ()))
    })
}

// ============================================================================
// Vector
// ============================================================================

/// Create an owned vector of `dim` zeros.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_new(dim: c_long, status: *mut StatusCode) -> *mut lp_vector {
    construct(status, || {
        let dim = size_arg(dim)?;
        Ok(lp_vector {
            inner: Vector::zeros(dim),
        })
    })
}

/// Wrap `dim` doubles at `data` without taking ownership.
///
/// # Safety
/// `data` must point to `dim` writable doubles that outlive the handle.
/// Releasing the handle does not free `data`. No other handle may wrap any
/// part of the same buffer while this one is in use; passing two such
/// handles to one call is undefined behaviour.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_wrap(
    data: *mut c_double,
    dim: c_long,
    status: *mut StatusCode,
) -> *mut lp_vector {
    construct(status, || {
        let dim = buffer_len(size_arg(dim)?)?;
        if data.is_null() && dim > 0 {
            return Err(LP_INVALID_ARGUMENT);
        }
        let slice: &'static mut [f64] = if dim == 0 {
            &mut []
        } else {
            unsafe { std::slice::from_raw_parts_mut(data, dim) }
        };
        Ok(lp_vector {
            inner: Vector::from_slice_mut(slice),
        })
    })
}

/// Deep-copy a vector. The copy always owns its storage.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_clone(src: *const lp_vector) -> *mut lp_vector {
    if src.is_null() {
        return ptr::null_mut();
    }
    duplicate(|| lp_vector {
        inner: unsafe { (*src).inner.to_owned_vector() },
    })
}

/// Release (free) a vector. Wrapped storage is left untouched.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_release(v: *mut lp_vector) {
    release(v);
}

/// Number of elements, or 0 for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_dim(v: *const lp_vector) -> c_long {
    if v.is_null() {
        return 0;
    }
    unsafe { (*v).inner.dim() as c_long }
}

/// 1 if the vector wraps caller storage, 0 otherwise.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_is_wrapped(v: *const lp_vector) -> c_int {
    if v.is_null() {
        return 0;
    }
    unsafe { (*v).inner.is_borrowed() as c_int }
}

/// Pointer to the element data.
///
/// # Safety
/// The returned pointer is only valid while the vector exists.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_data(v: *mut lp_vector) -> *mut c_double {
    if v.is_null() {
        return ptr::null_mut();
    }
    unsafe { (*v).inner.as_mut_slice().as_mut_ptr() }
}

/// Write element `i` to `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_get(v: *const lp_vector, i: c_long, out: *mut c_double) -> StatusCode {
    if v.is_null() || out.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let i = match index_arg(i) {
            Ok(i) => i,
            Err(code) => return code,
        };
        match unsafe { (*v).inner.get(i) } {
            Ok(value) => {
                unsafe {
                    *out = value;
                }
                LP_SUCCESS
            }
            Err(err) => status_of(&err),
        }
    })
}

/// Set element `i`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_set(v: *mut lp_vector, i: c_long, value: c_double) -> StatusCode {
    if v.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let i = match index_arg(i) {
            Ok(i) => i,
            Err(code) => return code,
        };
        match unsafe { (*v).inner.get_mut(i) } {
            Ok(elem) => {
                *elem = value;
                LP_SUCCESS
            }
            Err(err) => status_of(&err),
        }
    })
}

/// Inner product of `v` and `w`, written to `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_dot(
    v: *const lp_vector,
    w: *const lp_vector,
    out: *mut c_double,
) -> StatusCode {
    if v.is_null() || w.is_null() || out.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let (v, w) = unsafe { (&(*v).inner, &(*w).inner) };
        match v.dot(w) {
            Ok(value) => {
                unsafe {
                    *out = value;
                }
                LP_SUCCESS
            }
            Err(err) => status_of(&err),
        }
    })
}

/// `dest = src`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_assign(dest: *mut lp_vector, src: *const lp_vector) -> StatusCode {
    if dest.is_null() || src.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let src = unsafe { operand(dest, src) };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.assign(&src).map(|_| ()))
    })
}

/// `dest = v + w`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_sum(
    dest: *mut lp_vector,
    v: *const lp_vector,
    w: *const lp_vector,
) -> StatusCode {
    if dest.is_null() || v.is_null() || w.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let (v, w) = unsafe { (operand(dest, v), operand(dest, w)) };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.sum(&v, &w).map(|_| ()))
    })
}

/// `dest = v - w`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_diff(
    dest: *mut lp_vector,
    v: *const lp_vector,
    w: *const lp_vector,
) -> StatusCode {
    if dest.is_null() || v.is_null() || w.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let (v, w) = unsafe { (operand(dest, v), operand(dest, w)) };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.diff(&v, &w).map(|_| ()))
    })
}

/// `dest = x * v`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_real_mult(
    dest: *mut lp_vector,
    v: *const lp_vector,
    x: c_double,
) -> StatusCode {
    if dest.is_null() || v.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let v = unsafe { operand(dest, v) };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.real_mult(&v, x).map(|_| ()))
    })
}

/// `dest = v / x`. Division by zero yields IEEE infinities or NaN.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_real_div(
    dest: *mut lp_vector,
    v: *const lp_vector,
    x: c_double,
) -> StatusCode {
    if dest.is_null() || v.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let v = unsafe { operand(dest, v) };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.real_div(&v, x).map(|_| ()))
    })
}

/// `dest[i] = v[p[i]]`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_permute(
    dest: *mut lp_vector,
    v: *const lp_vector,
    p: *const lp_permutation,
) -> StatusCode {
    if dest.is_null() || v.is_null() || p.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let v = unsafe { operand(dest, v) };
        let p = unsafe { &(*p).inner };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.permute(&v, p).map(|_| ()))
    })
}

/// `dest[p[i]] = v[i]`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_permute_back(
    dest: *mut lp_vector,
    v: *const lp_vector,
    p: *const lp_permutation,
) -> StatusCode {
    if dest.is_null() || v.is_null() || p.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let v = unsafe { operand(dest, v) };
        let p = unsafe { &(*p).inner };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.permute_back(&v, p).map(|_| ()))
    })
}

/// `dest = a * v`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_vector_matrix_mult(
    dest: *mut lp_vector,
    a: *const lp_matrix,
    v: *const lp_vector,
) -> StatusCode {
    if dest.is_null() || a.is_null() || v.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let v = unsafe { operand(dest, v) };
        let a = unsafe { &(*a).inner };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.matrix_mult(a, &v).map(|_| ()))
    })
}

// ============================================================================
// Matrix
// ============================================================================

/// Create an owned, zero-initialized `height x width` matrix.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_new(
    height: c_long,
    width: c_long,
    status: *mut StatusCode,
) -> *mut lp_matrix {
    construct(status, || {
        let (height, width) = (size_arg(height)?, size_arg(width)?);
        let inner = Matrix::try_zeros(height, width).map_err(|e| status_of(&e))?;
        Ok(lp_matrix { inner })
    })
}

/// Wrap `height * width` row-major doubles at `data` without taking
/// ownership.
///
/// # Safety
/// `data` must point to `height * width` writable doubles that outlive the
/// handle. Releasing the handle does not free `data`. No other handle may
/// wrap any part of the same buffer while this one is in use; passing two
/// such handles to one call is undefined behaviour.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_wrap(
    data: *mut c_double,
    height: c_long,
    width: c_long,
    status: *mut StatusCode,
) -> *mut lp_matrix {
    construct(status, || {
        let (height, width) = (size_arg(height)?, size_arg(width)?);
        let len = height.checked_mul(width).ok_or(LP_INVALID_ARGUMENT)?;
        let len = buffer_len(len)?;
        if data.is_null() && len > 0 {
            return Err(LP_INVALID_ARGUMENT);
        }
        let slice: &'static mut [f64] = if len == 0 {
            &mut []
        } else {
            unsafe { std::slice::from_raw_parts_mut(data, len) }
        };
        let inner = Matrix::from_slice_mut(height, width, slice).map_err(|e| status_of(&e))?;
        Ok(lp_matrix { inner })
    })
}

/// Deep-copy a matrix. The copy always owns its storage.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_clone(src: *const lp_matrix) -> *mut lp_matrix {
    if src.is_null() {
        return ptr::null_mut();
    }
    duplicate(|| lp_matrix {
        inner: unsafe { (*src).inner.to_owned_matrix() },
    })
}

/// Release (free) a matrix. Wrapped storage is left untouched.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_release(m: *mut lp_matrix) {
    release(m);
}

/// Number of rows, or 0 for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_height(m: *const lp_matrix) -> c_long {
    if m.is_null() {
        return 0;
    }
    unsafe { (*m).inner.height() as c_long }
}

/// Number of columns, or 0 for a null handle.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_width(m: *const lp_matrix) -> c_long {
    if m.is_null() {
        return 0;
    }
    unsafe { (*m).inner.width() as c_long }
}

/// Pointer to the row-major element data.
///
/// # Safety
/// The returned pointer is only valid while the matrix exists.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_data(m: *mut lp_matrix) -> *mut c_double {
    if m.is_null() {
        return ptr::null_mut();
    }
    unsafe { (*m).inner.as_mut_slice().as_mut_ptr() }
}

/// Write element `(i, j)` to `out`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_get(
    m: *const lp_matrix,
    i: c_long,
    j: c_long,
    out: *mut c_double,
) -> StatusCode {
    if m.is_null() || out.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let (i, j) = match (index_arg(i), index_arg(j)) {
            (Ok(i), Ok(j)) => (i, j),
            _ => return LP_INDEX_OUT_OF_RANGE,
        };
        match unsafe { (*m).inner.get(i, j) } {
            Ok(value) => {
                unsafe {
                    *out = value;
                }
                LP_SUCCESS
            }
            Err(err) => status_of(&err),
        }
    })
}

/// Set element `(i, j)`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_set(
    m: *mut lp_matrix,
    i: c_long,
    j: c_long,
    value: c_double,
) -> StatusCode {
    if m.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let (i, j) = match (index_arg(i), index_arg(j)) {
            (Ok(i), Ok(j)) => (i, j),
            _ => return LP_INDEX_OUT_OF_RANGE,
        };
        match unsafe { (*m).inner.get_mut(i, j) } {
            Ok(elem) => {
                *elem = value;
                LP_SUCCESS
            }
            Err(err) => status_of(&err),
        }
    })
}

/// `dest = src`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_assign(dest: *mut lp_matrix, src: *const lp_matrix) -> StatusCode {
    if dest.is_null() || src.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let src = unsafe { matrix_operand(dest, src) };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.assign(&src).map(|_| ()))
    })
}

/// `dest(i, j) = a(row_p[i], col_p[j])`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_permute(
    dest: *mut lp_matrix,
    a: *const lp_matrix,
    row_p: *const lp_permutation,
    col_p: *const lp_permutation,
) -> StatusCode {
    if dest.is_null() || a.is_null() || row_p.is_null() || col_p.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let a = unsafe { matrix_operand(dest, a) };
        let (row_p, col_p) = unsafe { (&(*row_p).inner, &(*col_p).inner) };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.permute(&a, row_p, col_p).map(|_| ()))
    })
}

/// `dest(row_p[i], col_p[j]) = a(i, j)`.
#[unsafe(no_mangle)]
pub extern "C" fn lp_matrix_permute_back(
    dest: *mut lp_matrix,
    a: *const lp_matrix,
    row_p: *const lp_permutation,
    col_p: *const lp_permutation,
) -> StatusCode {
    if dest.is_null() || a.is_null() || row_p.is_null() || col_p.is_null() {
        return LP_INVALID_ARGUMENT;
    }

    guarded(|| {
        let a = unsafe { matrix_operand(dest, a) };
        let (row_p, col_p) = unsafe { (&(*row_p).inner, &(*col_p).inner) };
        let dest = unsafe { &mut (*dest).inner };
        to_status(dest.permute_back(&a, row_p, col_p).map(|_| ()))
    })
}

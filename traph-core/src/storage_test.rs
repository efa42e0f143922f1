use super::Storage;
use crate::error::TraphError;

#[test]
fn test_allocate_zero_initialized() -> Result<(), TraphError> {
    let storage = Storage::<f32>::allocate(5)?;
    assert_eq!(storage.len(), 5);
    assert_eq!(storage.to_vec()?, vec![0.0; 5]);
    Ok(())
}

#[test]
fn test_allocate_empty() -> Result<(), TraphError> {
    let storage = Storage::<f64>::allocate(0)?;
    assert!(storage.is_empty());
    assert_eq!(
        storage.read(0),
        Err(TraphError::OutOfRange { offset: 0, len: 0 })
    );
    Ok(())
}

#[test]
fn test_allocate_too_large_fails() {
    let result = Storage::<f64>::allocate(usize::MAX);
    assert_eq!(
        result.err(),
        Some(TraphError::AllocationError {
            requested: usize::MAX
        })
    );
}

#[test]
fn test_read_write() -> Result<(), TraphError> {
    let storage = Storage::<f32>::allocate(3)?;
    storage.write(1, 4.5)?;
    assert_eq!(storage.read(1)?, 4.5);
    assert_eq!(storage.read(0)?, 0.0);
    Ok(())
}

#[test]
fn test_out_of_range_access() -> Result<(), TraphError> {
    let storage = Storage::<f32>::allocate(3)?;
    assert_eq!(
        storage.read(3),
        Err(TraphError::OutOfRange { offset: 3, len: 3 })
    );
    assert_eq!(
        storage.write(7, 1.0),
        Err(TraphError::OutOfRange { offset: 7, len: 3 })
    );
    // Failed write left the buffer untouched
    assert_eq!(storage.to_vec()?, vec![0.0; 3]);
    Ok(())
}

#[test]
fn test_deep_clone_is_independent() -> Result<(), TraphError> {
    let storage = Storage::from_vec(vec![1.0f32, 2.0]);
    let copy = storage.deep_clone()?;
    copy.write(0, 9.0)?;
    assert_eq!(storage.read(0)?, 1.0);
    assert_eq!(copy.read(0)?, 9.0);
    Ok(())
}

#[test]
fn test_cast_between_precisions() -> Result<(), TraphError> {
    let storage = Storage::from_vec(vec![1.5f32, -2.0, 0.25]);
    let wide = storage.to_f64()?;
    assert_eq!(wide.to_vec()?, vec![1.5f64, -2.0, 0.25]);
    let narrow = wide.to_f32()?;
    assert_eq!(narrow.to_vec()?, storage.to_vec()?);
    // The source is left untouched
    wide.write(0, 9.0)?;
    assert_eq!(storage.read(0)?, 1.5);
    Ok(())
}

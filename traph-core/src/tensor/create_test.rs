use super::*;
use crate::types::DType;

#[test]
fn test_zeros() -> Result<(), TraphError> {
    let t = zeros(&[2, 3])?;
    assert_eq!(t.shape()?, vec![2, 3]);
    assert_eq!(t.numel()?, 6);
    assert_eq!(t.dtype(), DType::F32);
    assert!(t.to_vec()?.iter().all(|&x| x == 0.0));
    Ok(())
}

#[test]
fn test_ones() -> Result<(), TraphError> {
    let t = ones(&[1, 4])?;
    assert_eq!(t.shape()?, vec![1, 4]);
    assert!(t.to_vec()?.iter().all(|&x| x == 1.0));
    let t64 = ones_f64(&[3])?;
    assert_eq!(t64.dtype(), DType::F64);
    assert_eq!(t64.to_vec()?, vec![1.0; 3]);
    Ok(())
}

#[test]
fn test_full_and_like() -> Result<(), TraphError> {
    let t = full(&[2, 2], 2.5)?;
    assert_eq!(t.to_vec()?, vec![2.5; 4]);
    let z = zeros_like(&t)?;
    assert_eq!(z.shape()?, vec![2, 2]);
    assert_eq!(z.to_vec()?, vec![0.0; 4]);
    let o = ones_like(&full_f64(&[3], 4.0)?)?;
    assert_eq!(o.to_vec()?, vec![1.0f64; 3]);
    assert_eq!(zeros_f64(&[1])?.to_vec()?, vec![0.0]);
    Ok(())
}

#[test]
fn test_from_vec_helpers() -> Result<(), TraphError> {
    let t = from_vec_f32(vec![1.0, 2.0], vec![2, 1])?;
    assert_eq!(t.get(&[1, 0])?, 2.0);
    let t64 = from_vec_f64(vec![3.0], vec![])?;
    assert_eq!(t64.item()?, 3.0);
    Ok(())
}

#[test]
fn test_arange() -> Result<(), TraphError> {
    let t = arange(0.0, 5.0, 2.0)?;
    assert_eq!(t.to_vec()?, vec![0.0, 2.0, 4.0]);
    let down = arange(3.0, 0.0, -1.0)?;
    assert_eq!(down.to_vec()?, vec![3.0, 2.0, 1.0]);
    assert!(matches!(
        arange(0.0, 1.0, 0.0),
        Err(TraphError::InvalidArgument(_))
    ));
    assert!(matches!(
        arange(0.0, 1.0, -1.0),
        Err(TraphError::InvalidArgument(_))
    ));
    Ok(())
}

#[test]
fn test_rand_range_and_shape() -> Result<(), TraphError> {
    let t = rand(&[4, 5])?;
    assert_eq!(t.shape()?, vec![4, 5]);
    assert!(t.to_vec()?.iter().all(|&x| (0.0..1.0).contains(&x)));
    let n = randn(&[10])?;
    assert_eq!(n.numel()?, 10);
    assert!(n.to_vec()?.iter().all(|x| x.is_finite()));
    Ok(())
}

#[test]
fn test_shape_arg_tuple() -> Result<(), TraphError> {
    let t = zeros_from_arg(&ShapeArg::Tuple(vec![2, 3]))?;
    assert_eq!(t.shape()?, vec![2, 3]);
    let o = ones_from_arg(&ShapeArg::Tuple(vec![3]))?;
    assert_eq!(o.to_vec()?, vec![1.0; 3]);
    Ok(())
}

#[test]
fn test_shape_arg_rejects_other_kinds() {
    for arg in [
        ShapeArg::List(vec![2, 3]),
        ShapeArg::Int(3),
        ShapeArg::Float(2.0),
        ShapeArg::Text("2x3".to_string()),
    ] {
        assert!(
            matches!(zeros_from_arg(&arg), Err(TraphError::InvalidArgument(_))),
            "{:?} should be rejected",
            arg
        );
        assert!(matches!(ones_from_arg(&arg), Err(TraphError::InvalidArgument(_))));
    }
}

#[test]
fn test_shape_arg_negative_extent() {
    assert_eq!(
        zeros_from_arg(&ShapeArg::Tuple(vec![2, -3])).err(),
        Some(TraphError::InvalidShape { dims: vec![2, -3] })
    );
}

#[test]
fn test_rand_rejects_overflowing_shape() {
    let huge = [usize::MAX, 2];
    assert!(matches!(rand(&huge), Err(TraphError::AllocationError { .. })));
    assert!(matches!(randn(&huge), Err(TraphError::AllocationError { .. })));
}

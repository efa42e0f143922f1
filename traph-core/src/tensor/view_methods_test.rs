use crate::error::TraphError;
use crate::index::IndexItem;
use crate::slice::{Slice, SliceVector};
use crate::tensor::{FloatTensor, Tensor};

fn arange_tensor(shape: Vec<usize>) -> FloatTensor {
    let numel = shape.iter().product::<usize>();
    Tensor::from_vec((0..numel).map(|x| x as f32).collect(), shape)
        .expect("Test tensor creation failed")
}

fn slices(items: &[(isize, isize, isize)]) -> SliceVector {
    items
        .iter()
        .map(|&(start, step, stop)| Slice::new(start, step, stop))
        .collect()
}

#[test]
fn test_select_metadata() -> Result<(), TraphError> {
    let t = arange_tensor(vec![2, 3, 4]);
    let view = t.select(&slices(&[(1, 1, 2), (0, 2, 3), (1, 2, 4)]))?;
    assert_eq!(view.shape()?, vec![1, 2, 2]);
    assert_eq!(view.strides()?, vec![12, 8, 2]);
    assert_eq!(view.offset()?, 12 + 1);
    assert!(view.shares_storage_with(&t));
    assert!(!view.is_contiguous()?);
    // original [1,0,1], [1,0,3], [1,2,1], [1,2,3]
    assert_eq!(view.to_vec()?, vec![13.0, 15.0, 21.0, 23.0]);
    Ok(())
}

#[test]
fn test_select_missing_axes_default_to_full() -> Result<(), TraphError> {
    let t = arange_tensor(vec![3, 4]);
    let view = t.select(&slices(&[(1, 1, 3)]))?;
    assert_eq!(view.shape()?, vec![2, 4]);
    assert_eq!(view.strides()?, vec![4, 1]);
    assert_eq!(view.offset()?, 4);
    assert!(view.is_contiguous()?);
    Ok(())
}

#[test]
fn test_select_empty_vector_is_identity() -> Result<(), TraphError> {
    let t = arange_tensor(vec![2, 2]);
    let view = t.select(&SliceVector::new())?;
    assert_eq!(view, t);
    assert_eq!(view.strides()?, t.strides()?);
    Ok(())
}

#[test]
fn test_select_rank_mismatch() {
    let t = arange_tensor(vec![2, 2]);
    let result = t.select(&slices(&[(0, 1, 1), (0, 1, 1), (0, 1, 1)]));
    assert_eq!(
        result.err(),
        Some(TraphError::RankMismatch {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn test_select_out_of_bounds() {
    let t = arange_tensor(vec![2, 3]);
    let result = t.select(&slices(&[(0, 1, 2), (4, 1, 4)]));
    assert_eq!(
        result.err(),
        Some(TraphError::SliceOutOfBounds {
            axis: 1,
            start: 4,
            step: 1,
            stop: 4,
            extent: 3
        })
    );
}

#[test]
fn test_select_start_at_extent_gives_empty_axis() -> Result<(), TraphError> {
    let t = arange_tensor(vec![2, 3]);
    let view = t.select(&slices(&[(0, 1, 2), (3, 1, 3)]))?;
    assert_eq!(view.shape()?, vec![2, 0]);
    assert_eq!(view.numel()?, 0);
    assert!(view.to_vec()?.is_empty());
    Ok(())
}

#[test]
fn test_select_reversed_axis() -> Result<(), TraphError> {
    let t = arange_tensor(vec![2, 3]);
    let view = t.select(&slices(&[(0, 1, 2), (2, -1, -1)]))?;
    assert_eq!(view.shape()?, vec![2, 3]);
    assert_eq!(view.strides()?, vec![3, -1]);
    assert_eq!(view.offset()?, 2);
    assert_eq!(view.to_vec()?, vec![2.0, 1.0, 0.0, 5.0, 4.0, 3.0]);
    Ok(())
}

#[test]
fn test_select_of_select_on_reversed_view() -> Result<(), TraphError> {
    let t = arange_tensor(vec![6]);
    let reversed = t.select(&slices(&[(5, -1, -1)]))?; // 5,4,3,2,1,0
    let every_other = reversed.select(&slices(&[(1, 2, 6)]))?; // 4,2,0
    assert_eq!(every_other.strides()?, vec![-2]);
    assert_eq!(every_other.to_vec()?, vec![4.0, 2.0, 0.0]);
    Ok(())
}

#[test]
fn test_select_failure_leaves_source_unchanged() -> Result<(), TraphError> {
    let t = arange_tensor(vec![2, 2]);
    let before = t.to_vec()?;
    assert!(t.select(&slices(&[(0, 0, 1)])).is_err());
    assert_eq!(t.to_vec()?, before);
    assert_eq!(t.shape()?, vec![2, 2]);
    Ok(())
}

#[test]
fn test_select_on_unbound() {
    let t = FloatTensor::unbound();
    assert_eq!(
        t.select(&SliceVector::new()).err(),
        Some(TraphError::UnboundTensor {
            operation: "select".to_string()
        })
    );
}

// Integer indexing keeps the indexed axis with extent 1; it does not reduce rank.
#[test]
fn test_index_preserves_rank() -> Result<(), TraphError> {
    let t = arange_tensor(vec![2, 3]);
    let element = t.index(&[IndexItem::from(1usize), IndexItem::from(2usize)])?;
    assert_eq!(element.shape()?, vec![1, 1]);
    assert_eq!(element.item()?, 5.0);

    let row = t.index(&[IndexItem::from(0usize)])?;
    assert_eq!(row.shape()?, vec![1, 3]);
    assert_eq!(row.to_vec()?, vec![0.0, 1.0, 2.0]);
    Ok(())
}

#[test]
fn test_index_mixed_items() -> Result<(), TraphError> {
    let t = arange_tensor(vec![3, 4]);
    let view = t.index(&[IndexItem::from(1usize..3), IndexItem::range(None, Some(-2), None)])?;
    assert_eq!(view.shape()?, vec![2, 2]);
    // rows 1..3, columns 3 and 1
    assert_eq!(view.to_vec()?, vec![7.0, 5.0, 11.0, 9.0]);
    Ok(())
}

#[test]
fn test_index_too_many_items() {
    let t = arange_tensor(vec![2]);
    let result = t.index(&[IndexItem::from(0usize), IndexItem::from(0usize)]);
    assert!(matches!(result, Err(TraphError::RankMismatch { .. })));
}

#[test]
fn test_transpose_view() -> Result<(), TraphError> {
    let t = arange_tensor(vec![2, 3]);
    let tt = t.transpose(0, -1)?;
    assert_eq!(tt.shape()?, vec![3, 2]);
    assert_eq!(tt.strides()?, vec![1, 3]);
    assert_eq!(tt.to_vec()?, vec![0.0, 3.0, 1.0, 4.0, 2.0, 5.0]);
    // Source metadata is untouched
    assert_eq!(t.shape()?, vec![2, 3]);
    assert!(matches!(
        t.transpose(0, 2),
        Err(TraphError::DimensionOutOfRange { dim: 2, rank: 2 })
    ));
    Ok(())
}

#[test]
fn test_transpose_in_place() -> Result<(), TraphError> {
    let mut t = arange_tensor(vec![2, 3]);
    let handle = t.clone();
    t.transpose_(0, 1)?;
    assert_eq!(t.shape()?, vec![3, 2]);
    assert_eq!(handle.shape()?, vec![3, 2]);
    assert_eq!(t.get(&[2, 1])?, 5.0);
    Ok(())
}

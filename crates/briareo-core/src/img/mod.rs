mod transform;

pub use transform::{standard_transform, to_unit_tensor, GrayTensor, Transform, TENSOR_SIZE};

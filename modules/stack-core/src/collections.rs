/// Stack contract and its storage backends.
pub mod stack;

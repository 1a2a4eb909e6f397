//! Chain validation: digest recomputation and back-link checks.

use serde::{Deserialize, Serialize};

use crate::block::{Block, Record};
use crate::error::ValidationError;

/// Which optional checks a chain walk performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Check the genesis block's own digest and shape. When false, the walk
    /// starts at position 1 and genesis is trusted as-is.
    pub verify_genesis: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            verify_genesis: true,
        }
    }
}

/// Walk a chain and return the first broken invariant.
///
/// For every block after genesis:
/// - the stored digest must equal the recomputed digest
/// - the back-link must equal the predecessor's digest
/// - the position must equal the index
pub fn verify_chain<R: Record>(
    blocks: &[Block<R>],
    policy: &ValidationPolicy,
) -> Result<(), ValidationError> {
    let Some(genesis) = blocks.first() else {
        return Ok(());
    };

    if policy.verify_genesis {
        verify_genesis(genesis)?;
    }

    for (offset, pair) in blocks.windows(2).enumerate() {
        verify_link(offset as u64 + 1, &pair[0], &pair[1])?;
    }

    Ok(())
}

/// Check a single block against its predecessor.
pub fn verify_link<R: Record>(
    index: u64,
    previous: &Block<R>,
    current: &Block<R>,
) -> Result<(), ValidationError> {
    verify_self_digest(index, current)?;

    let expected = previous.digest.ok_or(ValidationError::Unsealed {
        position: index - 1,
    })?;
    if current.previous_digest != Some(expected) {
        return Err(ValidationError::LinkMismatch {
            position: index,
            expected,
            found: current.previous_digest,
        });
    }

    if current.position != index {
        return Err(ValidationError::PositionMismatch {
            index,
            found: current.position,
        });
    }

    Ok(())
}

/// Check the genesis block in isolation.
pub fn verify_genesis<R: Record>(genesis: &Block<R>) -> Result<(), ValidationError> {
    if genesis.position != 0 {
        return Err(ValidationError::PositionMismatch {
            index: 0,
            found: genesis.position,
        });
    }
    if genesis.previous_digest.is_some() {
        return Err(ValidationError::GenesisMalformed(
            "back-link is not the \"0\" sentinel".into(),
        ));
    }
    if !genesis.is_genesis() {
        return Err(ValidationError::GenesisMalformed(
            "payload is not a genesis message".into(),
        ));
    }
    verify_self_digest(0, genesis)
}

fn verify_self_digest<R: Record>(index: u64, block: &Block<R>) -> Result<(), ValidationError> {
    let stored = block
        .digest
        .ok_or(ValidationError::Unsealed { position: index })?;
    let computed = block.compute_digest();
    if stored != computed {
        return Err(ValidationError::DigestMismatch {
            position: index,
            stored,
            computed,
        });
    }
    Ok(())
}

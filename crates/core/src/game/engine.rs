//! Turn procedure run after every accepted player action.

use super::*;

mod turn;

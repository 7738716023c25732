//! Active-generator registration
//!
//! A [`GeneratorContext`] owns the library default generator and remembers
//! which generator newly constructed variables bind to (the *active* one).
//! Variables keep a [`GenHandle`] to the generator they were bound to, so
//! swapping the active generator never affects variables that already exist.
//!
//! Substitution is a plain swap, not a stack: `change_generator` hands back
//! the previous generator and the caller is responsible for reinstalling it.
//! [`GeneratorContext::with_generator`] does the save/restore for a scope.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::lcg::{RandNum, RandomGen};
use crate::error::RandomVarError;
use crate::parser::{parse_var, VarRegistry};
use crate::variables::{Distribution, RandomVar};

/// Shared, single-threaded handle to a generator
///
/// Several variables may draw from the same stream; the handle is not owned
/// by any of them.
pub type GenHandle = Rc<RefCell<RandomGen>>;

/// Wrap a generator into a shareable handle
pub fn new_handle(gen: RandomGen) -> GenHandle {
    Rc::new(RefCell::new(gen))
}

/// Registry of the default and the currently active generator
///
/// # Example
/// ```
/// use sim_randvar::rng::{new_handle, GeneratorContext, RandomGen};
/// use std::rc::Rc;
///
/// let mut ctx = GeneratorContext::new();
/// let mine = new_handle(RandomGen::new(4242).unwrap());
///
/// let previous = ctx.change_generator(Rc::clone(&mine));
/// let var = ctx.parse("uniform(0, 1)").unwrap();
/// assert!(Rc::ptr_eq(var.generator(), &mine));
///
/// ctx.change_generator(previous);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    default: GenHandle,
    active: GenHandle,
}

impl GeneratorContext {
    /// Context whose default generator starts at `DEFAULT_SEED`
    pub fn new() -> Self {
        let default = new_handle(RandomGen::default());
        Self {
            active: Rc::clone(&default),
            default,
        }
    }

    /// Context whose default generator starts at `seed`
    pub fn with_seed(seed: RandNum) -> Result<Self, RandomVarError> {
        let default = new_handle(RandomGen::new(seed)?);
        Ok(Self {
            active: Rc::clone(&default),
            default,
        })
    }

    /// Generator new variables bind to
    pub fn active(&self) -> GenHandle {
        Rc::clone(&self.active)
    }

    /// The built-in default generator of this context
    pub fn default_generator(&self) -> GenHandle {
        Rc::clone(&self.default)
    }

    /// True when the default generator is the active one
    pub fn is_default_active(&self) -> bool {
        Rc::ptr_eq(&self.active, &self.default)
    }

    /// Install `gen` as the active generator, returning the previous one
    pub fn change_generator(&mut self, gen: GenHandle) -> GenHandle {
        debug!(
            state = gen.borrow().current_state(),
            "changing active generator"
        );
        std::mem::replace(&mut self.active, gen)
    }

    /// Reinstall the default generator, whatever was active before
    pub fn restore_generator(&mut self) {
        debug!("restoring default generator");
        self.active = Rc::clone(&self.default);
    }

    /// Reseed the active generator
    pub fn init(&self, seed: RandNum) -> Result<(), RandomVarError> {
        self.active.borrow_mut().init(seed)?;
        debug!(seed, "reseeded active generator");
        Ok(())
    }

    /// Run `f` with `gen` active, then reinstall whatever was active before
    pub fn with_generator<T>(&mut self, gen: GenHandle, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = self.change_generator(gen);
        let result = f(self);
        self.active = previous;
        result
    }

    /// Bind a parameter record to the active generator
    pub fn bind(&self, dist: Distribution) -> Result<RandomVar, RandomVarError> {
        RandomVar::new(self.active(), dist)
    }

    /// Parse `expr` with the built-in registry and bind it to the active generator
    pub fn parse(&self, expr: &str) -> Result<RandomVar, RandomVarError> {
        parse_var(expr, self.active())
    }

    /// Parse `expr` with a caller-supplied registry
    pub fn parse_with(
        &self,
        expr: &str,
        registry: &VarRegistry,
    ) -> Result<RandomVar, RandomVarError> {
        registry.parse(expr, self.active())
    }
}

impl Default for GeneratorContext {
    fn default() -> Self {
        Self::new()
    }
}

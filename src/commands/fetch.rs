//! `mementor fetch` - print one memento at random.

use anyhow::{Context, Result};
use rand::Rng;

use crate::fs::StoreFile;
use crate::models::Memento;
use crate::store::Mementos;

/// Choose the memento to show, if there is any.
pub fn select<'a, R: Rng + ?Sized>(
    mementos: &'a Mementos,
    weighted: bool,
    rng: &mut R,
) -> Option<&'a Memento> {
    if weighted {
        mementos.pick_weighted(rng)
    } else {
        mementos.pick(rng)
    }
}

/// Print a random memento's message. An empty store prints nothing.
pub fn execute(store: &StoreFile, weighted: bool) -> Result<()> {
    let mementos = store.load().context("Failed to load mementos")?;
    if let Some(memento) = select(&mementos, weighted, &mut rand::thread_rng()) {
        println!("{}", memento.message);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_on_empty_store_succeeds() {
        let temp = TempDir::new().unwrap();
        let store = StoreFile::new(temp.path().join("mementos.json"));
        store.ensure_exists().unwrap();
        assert!(execute(&store, false).is_ok());
        assert!(execute(&store, true).is_ok());
    }

    #[test]
    fn test_select_single_memento() {
        let mut mementos = Mementos::default();
        mementos.add("only one", 0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select(&mementos, false, &mut rng).unwrap().message, "only one");
        assert_eq!(select(&mementos, true, &mut rng).unwrap().message, "only one");
    }
}

//! Storage migrations for pallet-token-ledger.
//!
//! Each migration checks the on-chain storage version before touching storage,
//! so it runs exactly once and is a no-op when re-applied. Wire migrations into
//! the runtime's `Executive` in version order:
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_token_ledger::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_runtime::traits::{CheckedAdd, Zero};
use sp_std::{marker::PhantomData, vec::Vec};

use crate::{Allowances, Balances, Config, Pallet, TotalSupply, LOG_TARGET};

/// Migration to version 1.
///
/// Version 0 ledgers could hold explicit zero entries in `Balances` and
/// `Allowances`. Version 1 never stores zero, so this migration:
///
/// 1. Removes zero-valued balance and allowance entries.
/// 2. Recomputes `TotalSupply` as the sum of the remaining balances.
/// 3. Stamps storage version 1.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version >= 1 {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                return T::DbWeight::get().reads(1);
            }

            let mut reads: u64 = 1;
            let mut writes: u64 = 0;

            let empty_balances: Vec<T::AccountId> = Balances::<T>::iter()
                .inspect(|_| reads += 1)
                .filter(|(_, balance)| balance.is_zero())
                .map(|(who, _)| who)
                .collect();
            for who in &empty_balances {
                Balances::<T>::remove(who);
                writes += 1;
            }

            let empty_allowances: Vec<(T::AccountId, T::AccountId)> = Allowances::<T>::iter()
                .inspect(|_| reads += 1)
                .filter(|(_, _, amount)| amount.is_zero())
                .map(|(owner, spender, _)| (owner, spender))
                .collect();
            for (owner, spender) in &empty_allowances {
                Allowances::<T>::remove(owner, spender);
                writes += 1;
            }

            let summed = Balances::<T>::iter_values()
                .inspect(|_| reads += 1)
                .try_fold(T::Balance::zero(), |acc, balance| acc.checked_add(&balance));
            match summed {
                Some(supply) => {
                    TotalSupply::<T>::put(supply);
                    writes += 1;
                }
                None => log::error!(
                    target: LOG_TARGET,
                    "Sum of balances overflows, keeping TotalSupply unchanged"
                ),
            }

            StorageVersion::new(1).put::<Pallet<T>>();
            writes += 1;

            log::info!(
                target: LOG_TARGET,
                "Migrated to v1: removed {} zero balances and {} zero allowances",
                empty_balances.len(),
                empty_allowances.len()
            );

            T::DbWeight::get().reads_writes(reads, writes)
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );
            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
            }

            Pallet::<T>::do_try_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, Test, ADMIN, EXCHANGE, USER};

    #[test]
    fn migration_v1_removes_zero_entries_and_repairs_supply() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            Balances::<Test>::insert(ADMIN, 70);
            Balances::<Test>::insert(USER, 30);
            Balances::<Test>::insert(EXCHANGE, 0);
            Allowances::<Test>::insert(USER, EXCHANGE, 0);
            Allowances::<Test>::insert(USER, ADMIN, 5);
            TotalSupply::<Test>::put(90);

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert!(!Balances::<Test>::contains_key(EXCHANGE));
            assert!(!Allowances::<Test>::contains_key(USER, EXCHANGE));
            assert_eq!(Allowances::<Test>::get(USER, ADMIN), 5);
            assert_eq!(TotalSupply::<Test>::get(), 100);
            assert!(Pallet::<Test>::do_try_state().is_ok());
        });
    }

    #[test]
    fn migration_v1_idempotent() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            Balances::<Test>::insert(ADMIN, 10);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            assert_eq!(TotalSupply::<Test>::get(), 10);

            // Already at v1: storage is no longer touched
            Balances::<Test>::insert(USER, 0);
            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
            assert!(Balances::<Test>::contains_key(USER));
        });
    }

    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();
            TotalSupply::<Test>::put(42);

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
            assert_eq!(TotalSupply::<Test>::get(), 42);
        });
    }
}

//! # Token Ledger Pallet
//!
//! A single fungible token: account balances, a total-supply counter and
//! ERC-20 style allowances. Only the supply controller, fixed at genesis, can
//! issue or redeem supply. Issued tokens are credited to the controller's own
//! account and distributed from there with ordinary transfers.
//!
//! Every call validates all of its preconditions before the first storage
//! write, so a rejected call leaves storage untouched. The ledger maintains
//! `TotalSupply == sum(Balances)` across every successful call.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::{
    traits::{AtLeast32BitUnsigned, CheckedAdd, CheckedSub, Zero},
    ArithmeticError,
};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod migrations;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub(crate) const LOG_TARGET: &str = "runtime::token-ledger";

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Token name, at most 64 bytes.
pub type TokenNameOf = BoundedVec<u8, ConstU32<64>>;

/// Token symbol, at most 16 bytes.
pub type TokenSymbolOf = BoundedVec<u8, ConstU32<16>>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
        /// Amount type for balances, allowances and total supply.
        type Balance: Parameter
            + Member
            + AtLeast32BitUnsigned
            + Default
            + Copy
            + MaxEncodedLen;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Token")
    #[pallet::storage]
    pub type TokenName<T> = StorageValue<_, TokenNameOf, ValueQuery>;

    /// Token symbol (e.g., "TKN")
    #[pallet::storage]
    pub type TokenSymbol<T> = StorageValue<_, TokenSymbolOf, ValueQuery>;

    /// Display decimals. Informational only, amounts are always integers.
    #[pallet::storage]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Sum of all balances.
    #[pallet::storage]
    pub type TotalSupply<T: Config> = StorageValue<_, T::Balance, ValueQuery>;

    /// The only account allowed to change the total supply.
    #[pallet::storage]
    pub type SupplyController<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account balances. Absent entries are zero; zero is never stored.
    #[pallet::storage]
    pub type Balances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, T::Balance, ValueQuery>;

    /// Remaining amount `spender` (second key) may move out of `owner`'s (first key) balance.
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        T::Balance,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// New tokens issued to the supply controller
        SupplyIncreased { controller: T::AccountId, amount: T::Balance },
        /// Tokens redeemed from the supply controller's balance
        SupplyDecreased { controller: T::AccountId, amount: T::Balance },
        /// Tokens moved from one account to another
        Transferred { from: T::AccountId, to: T::AccountId, amount: T::Balance },
        /// Allowance of `spender` over `owner`'s balance set to `amount`
        Approved { owner: T::AccountId, spender: T::AccountId, amount: T::Balance },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the supply controller.
        Unauthorized,
        /// Amount exceeds the source account's balance.
        InsufficientBalance,
        /// Amount exceeds the spender's remaining allowance.
        InsufficientAllowance,
        /// Result does not fit the balance type.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Issue `amount` new tokens to the supply controller's own account.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::increase_supply())]
        pub fn increase_supply(origin: OriginFor<T>, amount: T::Balance) -> DispatchResult {
            let controller = ensure_signed(origin)?;
            Self::ensure_supply_controller(&controller)?;

            let supply = TotalSupply::<T>::get().checked_add(&amount).ok_or(Error::<T>::Overflow)?;
            let balance =
                Balances::<T>::get(&controller).checked_add(&amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(supply);
            Self::write_balance(&controller, balance);

            log::debug!(target: LOG_TARGET, "supply increased by {:?} to {:?}", amount, supply);
            Self::deposit_event(Event::SupplyIncreased { controller, amount });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: T::Balance) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Set the allowance of `spender` over the caller's balance, replacing any previous value.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(
            origin: OriginFor<T>,
            spender: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::do_approve(owner, spender, amount);
            Ok(())
        }

        /// Move `amount` from `from` to `to` on behalf of `from`, consuming the caller's allowance.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: T::Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(&amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;

            // Balance checks happen inside; nothing is written unless they pass.
            Self::do_transfer(&from, &to, amount)?;
            Self::write_allowance(&from, &spender, remaining);
            Ok(())
        }

        /// Redeem `amount` tokens from the supply controller's own account.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::decrease_supply())]
        pub fn decrease_supply(origin: OriginFor<T>, amount: T::Balance) -> DispatchResult {
            let controller = ensure_signed(origin)?;
            Self::ensure_supply_controller(&controller)?;

            let balance = Balances::<T>::get(&controller)
                .checked_sub(&amount)
                .ok_or(Error::<T>::InsufficientBalance)?;
            let supply =
                TotalSupply::<T>::get().checked_sub(&amount).ok_or(ArithmeticError::Underflow)?;

            TotalSupply::<T>::put(supply);
            Self::write_balance(&controller, balance);

            log::debug!(target: LOG_TARGET, "supply decreased by {:?} to {:?}", amount, supply);
            Self::deposit_event(Event::SupplyDecreased { controller, amount });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: T::Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_add(&delta)
                .ok_or(Error::<T>::Overflow)?;
            Self::do_approve(owner, spender, amount);
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            delta: T::Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_sub(&delta)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::do_approve(owner, spender, amount);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account allowed to increase and decrease supply
        pub supply_controller: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: TokenNameOf =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: TokenSymbolOf =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            if let Some(ref controller) = self.supply_controller {
                SupplyController::<T>::put(controller);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    pub fn total_supply() -> T::Balance {
        TotalSupply::<T>::get()
    }

    pub fn token_name() -> Vec<u8> {
        TokenName::<T>::get().into_inner()
    }

    pub fn token_symbol() -> Vec<u8> {
        TokenSymbol::<T>::get().into_inner()
    }

    pub fn decimals() -> u8 {
        Decimals::<T>::get()
    }

    /// Balance of `who`, zero for accounts that never held tokens.
    pub fn balance_of(who: &T::AccountId) -> T::Balance {
        Balances::<T>::get(who)
    }

    /// Remaining amount `spender` may move out of `owner`'s balance.
    pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> T::Balance {
        Allowances::<T>::get(owner, spender)
    }

    pub fn supply_controller() -> Option<T::AccountId> {
        SupplyController::<T>::get()
    }

    fn ensure_supply_controller(who: &T::AccountId) -> DispatchResult {
        ensure!(SupplyController::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
        Ok(())
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// A self-transfer is validated against the balance like any other transfer
    /// and then leaves storage as it was.
    pub(crate) fn do_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: T::Balance,
    ) -> DispatchResult {
        let debited =
            Balances::<T>::get(from).checked_sub(&amount).ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let credited =
                Balances::<T>::get(to).checked_add(&amount).ok_or(Error::<T>::Overflow)?;
            Self::write_balance(from, debited);
            Self::write_balance(to, credited);
        }

        Self::deposit_event(Event::Transferred { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    fn do_approve(owner: T::AccountId, spender: T::AccountId, amount: T::Balance) {
        Self::write_allowance(&owner, &spender, amount);
        Self::deposit_event(Event::Approved { owner, spender, amount });
    }

    fn write_balance(who: &T::AccountId, amount: T::Balance) {
        if amount.is_zero() {
            Balances::<T>::remove(who);
        } else {
            Balances::<T>::insert(who, amount);
        }
    }

    fn write_allowance(owner: &T::AccountId, spender: &T::AccountId, amount: T::Balance) {
        if amount.is_zero() {
            Allowances::<T>::remove(owner, spender);
        } else {
            Allowances::<T>::insert(owner, spender, amount);
        }
    }

    /// Check the ledger's storage invariants.
    ///
    /// * `TotalSupply` equals the sum of all balances.
    /// * No balance or allowance entry stores zero.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::DispatchError> {
        let summed = Balances::<T>::iter_values()
            .try_fold(T::Balance::zero(), |acc, balance| acc.checked_add(&balance))
            .ok_or(sp_runtime::DispatchError::Other("sum of balances overflows"))?;

        let supply = TotalSupply::<T>::get();
        if summed != supply {
            log::error!(
                target: LOG_TARGET,
                "total supply {:?} does not match sum of balances {:?}",
                supply,
                summed
            );
            return Err("total supply does not match the sum of balances".into());
        }

        ensure!(
            Balances::<T>::iter_values().all(|balance| !balance.is_zero()),
            "zero balance stored"
        );
        ensure!(
            Allowances::<T>::iter_values().all(|amount| !amount.is_zero()),
            "zero allowance stored"
        );
        Ok(())
    }
}

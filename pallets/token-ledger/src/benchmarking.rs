//! Benchmarking setup for pallet-token-ledger

use super::*;

#[allow(unused)]
use crate::Pallet as TokenLedger;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn amount<T: Config>(value: u32) -> T::Balance {
    T::Balance::from(value)
}

/// Make `who` the supply controller holding `balance`, with matching total supply.
fn setup_controller<T: Config>(who: &T::AccountId, balance: T::Balance) {
    SupplyController::<T>::put(who);
    Balances::<T>::insert(who, balance);
    TotalSupply::<T>::put(balance);
}

/// Give `who` a non-controller balance backed by total supply.
fn fund<T: Config>(who: &T::AccountId, balance: T::Balance) {
    Balances::<T>::insert(who, balance);
    TotalSupply::<T>::put(balance);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn increase_supply() {
        let caller: T::AccountId = whitelisted_caller();
        setup_controller::<T>(&caller, amount::<T>(1_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount::<T>(1_000_000));

        assert_eq!(Balances::<T>::get(&caller), amount::<T>(2_000_000));
    }

    #[benchmark]
    fn decrease_supply() {
        let caller: T::AccountId = whitelisted_caller();
        setup_controller::<T>(&caller, amount::<T>(2_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), amount::<T>(1_000_000));

        assert_eq!(TotalSupply::<T>::get(), amount::<T>(1_000_000));
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&caller, amount::<T>(10_000_000));
        // Recipient already holds tokens: both balances are read and written
        Balances::<T>::insert(&recipient, amount::<T>(1));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount::<T>(1_000_000));

        assert_eq!(Balances::<T>::get(&recipient), amount::<T>(1_000_001));
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount::<T>(1_000_000));

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount::<T>(1_000_000));
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        Allowances::<T>::insert(&caller, &spender, amount::<T>(1_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount::<T>(1_000_000));

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount::<T>(2_000_000));
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        Allowances::<T>::insert(&caller, &spender, amount::<T>(2_000_000));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount::<T>(1_000_000));

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount::<T>(1_000_000));
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        fund::<T>(&owner, amount::<T>(10_000_000));
        Balances::<T>::insert(&recipient, amount::<T>(1));
        // Allowance is left non-zero so it is rewritten rather than removed
        Allowances::<T>::insert(&owner, &spender, amount::<T>(2_000_000));

        #[extrinsic_call]
        _(
            RawOrigin::Signed(spender.clone()),
            owner.clone(),
            recipient.clone(),
            amount::<T>(1_000_000),
        );

        assert_eq!(Allowances::<T>::get(&owner, &spender), amount::<T>(1_000_000));
        assert_eq!(Balances::<T>::get(&recipient), amount::<T>(1_000_001));
    }

    impl_benchmark_test_suite!(TokenLedger, crate::mock::new_test_ext(), crate::mock::Test);
}

use crate as pallet_gated_token;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        GatedToken: pallet_gated_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_gated_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type ReferenceClock = System;
    type WeightInfo = ();
}

pub const OWNER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;

pub const CAP: u128 = 10_000_000;
pub const LOCK_FROM_BLOCK: u64 = 1;
pub const LOCK_TO_BLOCK: u64 = 1_000;

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    // Build through `RuntimeGenesisConfig` so the `OnGenesis` hooks run and
    // write the in-code storage version, as a real runtime genesis does.
    let t = RuntimeGenesisConfig {
        system: Default::default(),
        gated_token: pallet_gated_token::GenesisConfig::<Test> {
            owner: Some(OWNER),
            token_name: b"Gated Token".to_vec(),
            token_symbol: b"GTK".to_vec(),
            decimals: 18,
            cap: CAP,
            lock_from_block: LOCK_FROM_BLOCK,
            lock_to_block: LOCK_TO_BLOCK,
            whitelisted_accounts: vec![],
            initial_balances: vec![(ALICE, 1_000)],
        },
    }
    .build_storage()
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Move the reference clock to `n`.
pub fn run_to_block(n: u64) {
    System::set_block_number(n);
}

use alloc::vec::Vec;

use alloy_sol_types::SolCall;
use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{Address, U256},
    call::Call,
    prelude::*,
};

use smart_account_types::{counterfactual_address, proxy_init_code, salt_word, ISmartAccount};

use crate::{
    errors::{FactoryError, InvalidImplementation, ProxyDeploymentFailed},
    events::{AccountCreation, AccountCreationWithoutIndex},
};

sol_storage! {
    #[entrypoint]
    pub struct SmartAccountFactory {
        /// Smart account implementation every proxy delegates to.
        address basic_implementation;
        /// Proxy creation code; the implementation word is appended per deployment.
        bytes proxy_creation_code;
    }
}

#[public]
impl SmartAccountFactory {
    #[constructor]
    pub fn constructor(&mut self, implementation: Address, proxy_creation_code: Bytes) -> Result<(), FactoryError> {
        if implementation == Address::ZERO {
            return Err(InvalidImplementation { implementation }.into());
        }
        self.basic_implementation.set(implementation);
        self.proxy_creation_code.set_bytes(&proxy_creation_code);
        Ok(())
    }

    pub fn basic_implementation(&self) -> Address {
        self.basic_implementation.get()
    }

    /// Full proxy init code for this factory's implementation.
    pub fn get_bytecode(&self) -> Bytes {
        self._init_code().into()
    }

    pub fn account_creation_code(&self) -> Bytes {
        self.proxy_creation_code.get_bytes().into()
    }

    /// Address `deploy_smart_account(salt, ..)` deploys to, whether or not it exists yet.
    pub fn get_proxy_address(&self, salt: U256) -> Address {
        counterfactual_address(self.vm().contract_address(), salt, &self._init_code())
    }

    /// Deploy a proxy at [`Self::get_proxy_address`] and, when `initial_target` and
    /// `init_data` are both given, initialize it through `init(initial_target, init_data)`.
    /// Revert data of the initialization comes back unchanged.
    pub fn deploy_smart_account(
        &mut self,
        salt: U256,
        initial_target: Address,
        init_data: Bytes,
    ) -> Result<Address, Vec<u8>> {
        let expected = self.get_proxy_address(salt);
        let code = self._init_code();
        let proxy = match unsafe { self.vm().deploy(&code, U256::ZERO, Some(salt_word(salt))) } {
            Ok(proxy) if proxy != Address::ZERO => proxy,
            _ => return Err(FactoryError::from(ProxyDeploymentFailed { proxy: expected }).into()),
        };

        self._initialize(proxy, initial_target, init_data)?;

        let implementation = self.basic_implementation.get();
        stylus_sdk::stylus_core::log(self.vm(), AccountCreation { account: proxy, implementation, salt });
        Ok(proxy)
    }

    /// Like [`Self::deploy_smart_account`] but with plain CREATE, so the address depends on
    /// the factory's nonce.
    pub fn deploy_account(&mut self, initial_target: Address, init_data: Bytes) -> Result<Address, Vec<u8>> {
        let code = self._init_code();
        let proxy = match unsafe { self.vm().deploy(&code, U256::ZERO, None) } {
            Ok(proxy) if proxy != Address::ZERO => proxy,
            _ => return Err(FactoryError::from(ProxyDeploymentFailed { proxy: Address::ZERO }).into()),
        };

        self._initialize(proxy, initial_target, init_data)?;

        let implementation = self.basic_implementation.get();
        stylus_sdk::stylus_core::log(self.vm(), AccountCreationWithoutIndex { account: proxy, implementation });
        Ok(proxy)
    }
}

impl SmartAccountFactory {
    fn _init_code(&self) -> Vec<u8> {
        proxy_init_code(&self.proxy_creation_code.get_bytes(), self.basic_implementation.get())
    }

    fn _initialize(&mut self, proxy: Address, initial_target: Address, init_data: Bytes) -> Result<(), Vec<u8>> {
        if initial_target == Address::ZERO || init_data.is_empty() {
            return Ok(());
        }
        let data = ISmartAccount::initCall { setupContract: initial_target, setupData: init_data.to_vec().into() }
            .abi_encode();
        let ctx = Call::new_payable(self, U256::ZERO);
        self.vm().call(&ctx, proxy, &data).map_err(Vec::<u8>::from)?;
        Ok(())
    }
}

//! REST endpoint table.
//!
//! Every path is relative to the configured base URL. Endpoints whose path
//! ends with `/` take a suffix (record code or SRF number).

/// One backend route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    // auth
    Login,
    Logout,
    RefreshToken,
    AuthMe,

    MenuDashboard,

    // user
    CreateUser,
    DeleteUser,
    ChangePassword,
    GetAllUsers,
    GetStandardUsers,

    // master
    MasterCreate,
    MasterNextCode,
    MasterListNames,
    MasterUpdate,
    MasterSearchCode,
    MasterSearchName,
    MasterSearchAddress,

    // road challans
    ChallanSmartCreate,
    ChallanSmartNextNumber,
    ChallanSmartLastNumber,
    ChallanSmartPrint,
    ChallanUniqueCreate,
    ChallanUniqueNextNumber,
    ChallanUniqueLastNumber,
    ChallanUniquePrint,

    // retail
    RetailNextRcode,
    RetailCreate,
    RetailEnquiry,
    RetailListOfNotReceived,
    RetailUpdateReceived,
    RetailListOfUnsettled,
    RetailUpdateUnsettled,
    RetailListOfFinalSettlement,
    RetailUpdateFinalSettlement,
    RetailShowReceiptNames,
    RetailPrint,

    // warranty
    WarrantyNextCode,
    WarrantyCreate,
    WarrantyListPending,
    WarrantyBySrfNumber,
    WarrantyUpdate,
    WarrantyListDeliveredBy,
    WarrantyLastSrfNumber,
    WarrantySrfPrint,
    WarrantyEnquiry,
    WarrantySrfNotSettled,
    WarrantyUpdateSrfUnsettled,
    WarrantyListFinalSrfSettlement,
    WarrantyUpdateFinalSrfSettlement,

    ServiceCenterListNames,
    ServiceCenterCreate,
    ServiceCharge,

    // model
    ModelCreate,
    ModelList,
    ModelCostDetails,
    RewindingRateForModel,

    ComplaintNumberUpload,
    ComplaintNumberList,
    CgSrfNumberUpload,

    // out of warranty
    OutOfWarrantyNextCode,
    OutOfWarrantyCreate,
    OutOfWarrantyListPending,
    OutOfWarrantyBySrfNumber,
    OutOfWarrantyUpdate,
    OutOfWarrantyLastSrfNumber,
    OutOfWarrantySrfPrint,
    OutOfWarrantySrfNotSettled,
    OutOfWarrantyUpdateSrfUnsettled,
    OutOfWarrantyListFinalSrfSettlement,
    OutOfWarrantyUpdateFinalSrfSettlement,
    OutOfWarrantyEnquiry,

    // vendor
    VendorNextChallanCode,
    VendorLastChallanCode,
    VendorListChallan,
    VendorCreate,
    VendorChallanPrint,
    VendorListReceivedBy,
    VendorNotSettled,
    VendorUpdateUnsettled,
    VendorFinalSettled,
    VendorUpdateFinalSettled,
    VendorUpdateComplaintNumber,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        use Endpoint::*;
        match self {
            Login => "auth/login",
            Logout => "auth/logout",
            RefreshToken => "auth/refresh_token",
            AuthMe => "auth/me",

            MenuDashboard => "menu/dashboard",

            CreateUser => "user/create_user",
            DeleteUser => "user/delete_user",
            ChangePassword => "user/reset_password",
            GetAllUsers => "user/users",
            GetStandardUsers => "user/standard_users",

            MasterCreate => "master/create",
            MasterNextCode => "master/next_code",
            MasterListNames => "master/list_names",
            MasterUpdate => "master/update/",
            MasterSearchCode => "master/by_code",
            MasterSearchName => "master/by_name",
            MasterSearchAddress => "master/fetch_address",

            ChallanSmartCreate => "challan_smart/create",
            ChallanSmartNextNumber => "challan_smart/next_code_with_challan_date",
            ChallanSmartLastNumber => "challan_smart/last_challan_number",
            ChallanSmartPrint => "challan_smart/print",
            ChallanUniqueCreate => "challan_unique/create",
            ChallanUniqueNextNumber => "challan_unique/next_code_with_challan_date",
            ChallanUniqueLastNumber => "challan_unique/last_challan_number",
            ChallanUniquePrint => "challan_unique/print",

            RetailNextRcode => "retail/next_rcode",
            RetailCreate => "retail/create",
            RetailEnquiry => "retail/enquiry",
            RetailListOfNotReceived => "retail/list_of_not_received",
            RetailUpdateReceived => "retail/update_received",
            RetailListOfUnsettled => "retail/list_of_unsettled",
            RetailUpdateUnsettled => "retail/update_unsettled",
            RetailListOfFinalSettlement => "retail/list_of_final_settlement",
            RetailUpdateFinalSettlement => "retail/update_final_settlement",
            RetailShowReceiptNames => "retail/show_receipt_names",
            RetailPrint => "retail/print",

            WarrantyNextCode => "warranty/next_srf_number",
            WarrantyCreate => "warranty/create",
            WarrantyListPending => "warranty/list_pending",
            WarrantyBySrfNumber => "warranty/by_srf_number",
            WarrantyUpdate => "warranty/update/",
            WarrantyListDeliveredBy => "warranty/list_delivered_by",
            WarrantyLastSrfNumber => "warranty/last_srf_number",
            WarrantySrfPrint => "warranty/srf_print",
            WarrantyEnquiry => "warranty/enquiry",
            WarrantySrfNotSettled => "warranty/srf_not_settled",
            WarrantyUpdateSrfUnsettled => "warranty/update_srf_unsettled",
            WarrantyListFinalSrfSettlement => "warranty/list_of_final_srf_settlement",
            WarrantyUpdateFinalSrfSettlement => "warranty/update_final_srf_settlement",

            ServiceCenterListNames => "service_center/list_names",
            ServiceCenterCreate => "service_center/create",
            ServiceCharge => "service_charge/service_charge",

            ModelCreate => "model/create",
            ModelList => "model/model_list",
            ModelCostDetails => "model/cost_details",
            RewindingRateForModel => "rewinding_rate/rewinding_rate",

            ComplaintNumberUpload => "complaint_number/upload",
            ComplaintNumberList => "complaint_number/list_complaints",
            CgSrfNumberUpload => "cg_srf_number/upload",

            OutOfWarrantyNextCode => "out_of_warranty/next_srf_number",
            OutOfWarrantyCreate => "out_of_warranty/create",
            OutOfWarrantyListPending => "out_of_warranty/list_pending",
            OutOfWarrantyBySrfNumber => "out_of_warranty/by_srf_number",
            OutOfWarrantyUpdate => "out_of_warranty/update/",
            OutOfWarrantyLastSrfNumber => "out_of_warranty/last_srf_number",
            OutOfWarrantySrfPrint => "out_of_warranty/srf_print",
            OutOfWarrantySrfNotSettled => "out_of_warranty/srf_not_settled",
            OutOfWarrantyUpdateSrfUnsettled => "out_of_warranty/update_srf_unsettled",
            OutOfWarrantyListFinalSrfSettlement => "out_of_warranty/list_of_final_srf_settlement",
            OutOfWarrantyUpdateFinalSrfSettlement => "out_of_warranty/update_final_srf_settlement",
            OutOfWarrantyEnquiry => "out_of_warranty/enquiry",

            VendorNextChallanCode => "vendor/next_vendor_challan_code",
            VendorLastChallanCode => "vendor/last_vendor_challan_code",
            VendorListChallan => "vendor/list_vendor_challan_details",
            VendorCreate => "vendor/create_vendor_challan",
            VendorChallanPrint => "vendor/vendor_challan_print",
            VendorListReceivedBy => "vendor/list_received_by",
            VendorNotSettled => "vendor/vendor_not_settled",
            VendorUpdateUnsettled => "vendor/update_vendor_unsettled",
            VendorFinalSettled => "vendor/list_of_final_vendor_settlement",
            VendorUpdateFinalSettled => "vendor/update_final_vendor_settlement",
            VendorUpdateComplaintNumber => "vendor/update_complaint_number",
        }
    }

    /// `true` for paths that expect a record key appended.
    pub fn takes_suffix(self) -> bool {
        self.path().ends_with('/')
    }

    pub fn url(self, base: &str) -> String {
        format!("{}{}", base, self.path())
    }

    /// URL with a path segment appended, percent-encoded.
    pub fn url_with(self, base: &str, suffix: &str) -> String {
        format!("{}{}{}", base, self.path(), urlencoding::encode(suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8000/";

    #[test]
    fn test_urls() {
        assert_eq!(
            Endpoint::CgSrfNumberUpload.url(BASE),
            "http://localhost:8000/cg_srf_number/upload"
        );
        assert_eq!(
            Endpoint::VendorFinalSettled.url(BASE),
            "http://localhost:8000/vendor/list_of_final_vendor_settlement"
        );
        assert_eq!(
            Endpoint::RewindingRateForModel.url(BASE),
            "http://localhost:8000/rewinding_rate/rewinding_rate"
        );
    }

    #[test]
    fn test_suffix_is_encoded() {
        assert!(Endpoint::WarrantyUpdate.takes_suffix());
        assert!(!Endpoint::WarrantyBySrfNumber.takes_suffix());
        assert_eq!(
            Endpoint::WarrantyUpdate.url_with(BASE, "W0001"),
            "http://localhost:8000/warranty/update/W0001"
        );
        assert_eq!(
            Endpoint::MasterUpdate.url_with(BASE, "C 12/3"),
            "http://localhost:8000/master/update/C%2012%2F3"
        );
    }

    #[test]
    fn test_paths_are_relative() {
        for endpoint in [
            Endpoint::Login,
            Endpoint::MenuDashboard,
            Endpoint::ModelCreate,
            Endpoint::OutOfWarrantyEnquiry,
            Endpoint::VendorUpdateComplaintNumber,
        ] {
            assert!(!endpoint.path().starts_with('/'));
        }
    }
}

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct WelcomePanelProps {
    pub brand: AttrValue,
}

#[function_component(WelcomePanel)]
pub(crate) fn welcome_panel(props: &WelcomePanelProps) -> Html {
    html! {
        <>
            <div class="flex-1 flex justify-center items-center min-h-[400px] sm:min-h-[500px] lg:min-h-[600px] ml-4 lg:ml-0">
                <div class="flex flex-col items-center justify-center text-center px-4">
                    <div class="text-[60px] sm:text-[80px] md:text-[100px] lg:text-[120px] mb-4 sm:mb-6">
                        {"😊"}
                    </div>
                    <h1 class="text-[#fcfcfc] text-[18px] sm:text-[20px] md:text-[24px] lg:text-[28px] font-medium font-['Inter'] mb-2 sm:mb-4">
                        {format!("Welcome to {}", props.brand)}
                    </h1>
                    <p class="text-[#fcfcfc] opacity-70 text-[14px] sm:text-[16px] md:text-[18px] font-normal font-['Inter'] max-w-md">
                        {"Select a menu item from the sidebar to get started with managing your tasks and deadlines."}
                    </p>
                </div>
            </div>
            <div class="absolute top-[386px] left-[354px] hidden xl:block">
                <img src="/images/img_.png" alt="Floating emoji decoration" class="w-[30px] h-[42px]" />
            </div>
        </>
    }
}
